//! The ordered document collection and its invariants

use super::document::{Document, DEFAULT_TITLE};
use super::error::{StoreError, StoreResult};

/// All documents plus the index of the one being edited
///
/// `documents` is never empty and `active_index` always points into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    documents: Vec<Document>,
    active_index: usize,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            documents: vec![Document::new(DEFAULT_TITLE, "")],
            active_index: 0,
        }
    }
}

impl Workspace {
    /// Build a workspace from stored documents, falling back to the default
    /// workspace when there are none
    pub fn from_documents(documents: Vec<Document>, active_index: usize) -> Self {
        if documents.is_empty() {
            return Self::default();
        }
        let active_index = active_index.min(documents.len() - 1);
        Self {
            documents,
            active_index,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The document currently shown in the editor
    pub fn active(&self) -> &Document {
        &self.documents[self.active_index]
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Append a document and make it active
    pub fn add_document(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.push(Document::new(title, content));
    }

    /// Append an already-built document and make it active
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
        self.active_index = self.documents.len() - 1;
    }

    /// Remove the document at `index`
    ///
    /// The sole remaining document cannot be removed. The active index keeps
    /// its position and is only clamped when it falls off the end.
    pub fn delete_document(&mut self, index: usize) -> StoreResult<Document> {
        self.check_index(index)?;
        if self.documents.len() <= 1 {
            return Err(StoreError::LastDocument);
        }

        let removed = self.documents.remove(index);
        if self.active_index >= self.documents.len() {
            self.active_index = self.documents.len() - 1;
        }
        Ok(removed)
    }

    /// Replace the content of the document at `index`, re-deriving its title
    pub fn update_content(&mut self, index: usize, content: String) -> StoreResult<()> {
        self.check_index(index)?;
        self.documents[index].set_content(content);
        Ok(())
    }

    /// Select the document at `index`
    pub fn set_active(&mut self, index: usize) -> StoreResult<()> {
        self.check_index(index)?;
        self.active_index = index;
        Ok(())
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index < self.documents.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.documents.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::{NEW_DOCUMENT_TITLE, PLACEHOLDER_TITLE};

    fn assert_invariants(ws: &Workspace) {
        assert!(ws.len() >= 1);
        assert!(ws.active_index() < ws.len());
    }

    #[test]
    fn test_default_has_one_empty_document() {
        let ws = Workspace::default();
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.active_index(), 0);
        assert_eq!(ws.active().title, DEFAULT_TITLE);
        assert!(ws.active().content.is_empty());
    }

    #[test]
    fn test_add_makes_new_document_active() {
        let mut ws = Workspace::default();
        ws.add_document(NEW_DOCUMENT_TITLE, "");
        ws.add_document(NEW_DOCUMENT_TITLE, "");
        assert_eq!(ws.len(), 3);
        assert_eq!(ws.active_index(), 2);
    }

    #[test]
    fn test_delete_last_document_is_rejected() {
        let mut ws = Workspace::default();
        let before = ws.clone();
        assert_eq!(ws.delete_document(0), Err(StoreError::LastDocument));
        assert_eq!(ws, before);
    }

    #[test]
    fn test_delete_reclamps_active_index() {
        let mut ws = Workspace::default();
        ws.add_document("b", "");
        ws.add_document("c", "");

        ws.delete_document(1).unwrap();
        assert_eq!(ws.len(), 2);
        assert_eq!(ws.active_index(), 1);
        assert_eq!(ws.active().title, "c");

        ws.delete_document(1).unwrap();
        assert_eq!(ws.active_index(), 0);
        assert_eq!(ws.active().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_delete_earlier_keeps_active_position() {
        let mut ws = Workspace::default();
        ws.add_document("b", "");
        ws.add_document("c", "");
        ws.set_active(1).unwrap();

        ws.delete_document(0).unwrap();
        assert_eq!(ws.len(), 2);
        assert_eq!(ws.active_index(), 1);
        assert_eq!(ws.active().title, "c");
    }

    #[test]
    fn test_delete_earlier_clamps_when_active_was_last() {
        let mut ws = Workspace::default();
        ws.add_document("b", "");

        ws.delete_document(0).unwrap();
        assert_eq!(ws.active_index(), 0);
        assert_eq!(ws.active().title, "b");
    }

    #[test]
    fn test_delete_later_keeps_active_index() {
        let mut ws = Workspace::default();
        ws.add_document("b", "");
        ws.add_document("c", "");
        ws.set_active(0).unwrap();

        ws.delete_document(2).unwrap();
        assert_eq!(ws.active_index(), 0);
        assert_eq!(ws.active().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_invariants_hold_across_mixed_operations() {
        let mut ws = Workspace::default();
        for step in 0..40usize {
            if step % 3 == 2 && ws.len() > 1 {
                let index = (step * 7) % ws.len();
                ws.delete_document(index).unwrap();
            } else {
                ws.add_document(format!("doc {step}"), "");
            }
            assert_invariants(&ws);
        }
        while ws.len() > 1 {
            ws.delete_document(0).unwrap();
            assert_invariants(&ws);
        }
        assert_eq!(ws.delete_document(0), Err(StoreError::LastDocument));
        assert_invariants(&ws);
    }

    #[test]
    fn test_update_content_derives_title() {
        let mut ws = Workspace::default();
        ws.update_content(0, "Hello\nworld".to_string()).unwrap();
        assert_eq!(ws.active().title, "Hello");
        assert_eq!(ws.active().content, "Hello\nworld");

        ws.update_content(0, String::new()).unwrap();
        assert_eq!(ws.active().title, PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_out_of_range_indices() {
        let mut ws = Workspace::default();
        ws.add_document("b", "");
        let err = StoreError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(ws.set_active(5), Err(err.clone()));
        assert_eq!(ws.delete_document(5).map(|_| ()), Err(err.clone()));
        assert_eq!(ws.update_content(5, "x".into()), Err(err));
        assert_eq!(ws.active_index(), 1);
    }

    #[test]
    fn test_from_documents_clamps() {
        let docs = vec![Document::new("a", ""), Document::new("b", "")];
        let ws = Workspace::from_documents(docs, 9);
        assert_eq!(ws.active_index(), 1);

        assert_eq!(Workspace::from_documents(Vec::new(), 0), Workspace::default());
    }
}
