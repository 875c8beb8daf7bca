//! Plain-text documents and the title rules that apply to them

use serde::{Deserialize, Serialize};

/// Number of characters of the first line shown as a tab title
pub const TITLE_WIDTH: usize = 18;

/// Title used when the first line of a document is empty
pub const PLACEHOLDER_TITLE: &str = "Untitled";

/// Title of the document created for a fresh workspace
pub const DEFAULT_TITLE: &str = "Untitled Document";

/// Title of a document created with the "new" action
pub const NEW_DOCUMENT_TITLE: &str = "New Document";

/// A short text document shown as one tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display title
    pub title: String,
    /// Raw text body
    pub content: String,
}

impl Document {
    /// Create a document with an explicit title
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Create a document from an imported file
    pub fn imported(filename: &str, content: impl Into<String>) -> Self {
        Self::new(title_from_filename(filename), content)
    }

    /// Replace the content and re-derive the title from its first line
    pub fn set_content(&mut self, content: String) {
        self.title = derive_title(&content);
        self.content = content;
    }

    /// Title as it should appear on a tab
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            PLACEHOLDER_TITLE
        } else {
            &self.title
        }
    }

    /// Suggested filename when exporting this document
    pub fn export_filename(&self) -> String {
        let stem: String = self
            .display_title()
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        format!("{stem}.txt")
    }
}

/// Derive a title from the first line of `content`
pub fn derive_title(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default();
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);
    let title: String = first_line.chars().take(TITLE_WIDTH).collect();

    if title.is_empty() {
        PLACEHOLDER_TITLE.to_string()
    } else {
        title
    }
}

/// Derive a title from an imported filename, dropping any directory part
/// and a trailing `.txt` extension
pub fn title_from_filename(filename: &str) -> String {
    let name = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);

    let stem = match name.len().checked_sub(4) {
        Some(split)
            if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(".txt") =>
        {
            &name[..split]
        }
        _ => name,
    };

    if stem.is_empty() {
        PLACEHOLDER_TITLE.to_string()
    } else {
        stem.to_string()
    }
}
