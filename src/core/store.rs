//! Loading and saving the workspace through a persistence provider

use serde::{Deserialize, Serialize};

use super::document::Document;
use super::error::{StoreError, StoreResult};
use super::storage::KeyValueStore;
use super::workspace::Workspace;

/// Default slot the workspace is stored under
pub const DEFAULT_STORAGE_KEY: &str = "typly_docs";

/// Serialized workspace as written to storage
#[derive(Debug, Serialize)]
struct StoredWorkspace<'a> {
    documents: &'a [Document],
    active_index: usize,
}

/// Every shape accepted when reading the slot back
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredForm {
    Current {
        documents: Vec<Document>,
        #[serde(default)]
        active_index: usize,
    },
    /// Bare document array without an active index
    Legacy(Vec<Document>),
}

/// Durable home of the workspace
pub struct DocumentStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> DocumentStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Read the workspace from storage
    ///
    /// Never fails: an absent, empty, unreadable or malformed slot yields
    /// the default workspace.
    pub fn load(&self) -> Workspace {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("No stored workspace under '{}', starting fresh", self.key);
                return Workspace::default();
            }
            Err(e) => {
                tracing::warn!("Could not read stored workspace: {}", e);
                return Workspace::default();
            }
        };

        match serde_json::from_str::<StoredForm>(&raw) {
            Ok(StoredForm::Current {
                documents,
                active_index,
            }) => {
                tracing::info!("Loaded {} documents", documents.len());
                Workspace::from_documents(documents, active_index)
            }
            Ok(StoredForm::Legacy(documents)) => {
                tracing::info!("Loaded {} documents (legacy format)", documents.len());
                Workspace::from_documents(documents, 0)
            }
            Err(e) => {
                tracing::warn!("Stored workspace is malformed, starting fresh: {}", e);
                Workspace::default()
            }
        }
    }

    /// Write the whole workspace, replacing whatever the slot held
    pub fn save(&mut self, workspace: &Workspace) -> StoreResult<()> {
        let stored = StoredWorkspace {
            documents: workspace.documents(),
            active_index: workspace.active_index(),
        };
        let raw = serde_json::to_string(&stored)
            .map_err(|e| StoreError::StorageWriteFailed(e.to_string()))?;
        self.storage.set(&self.key, &raw)?;
        tracing::debug!("Saved {} documents to '{}'", workspace.len(), self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{FileStorage, MemoryStorage};

    fn store_with(raw: &str) -> DocumentStore<MemoryStorage> {
        let mut storage = MemoryStorage::new();
        storage.set(DEFAULT_STORAGE_KEY, raw).unwrap();
        DocumentStore::new(storage, DEFAULT_STORAGE_KEY)
    }

    struct UnreadableStorage;

    impl KeyValueStore for UnreadableStorage {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::StorageUnavailable("disk gone".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::StorageWriteFailed("quota exceeded".into()))
        }
    }

    #[test]
    fn test_load_absent_gives_default() {
        let store = DocumentStore::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        assert_eq!(store.load(), Workspace::default());
    }

    #[test]
    fn test_load_malformed_or_empty_gives_default() {
        for raw in ["", "not json", "{\"documents\": 3}", "[]", "{\"documents\": []}"] {
            assert_eq!(store_with(raw).load(), Workspace::default(), "input: {raw:?}");
        }
    }

    #[test]
    fn test_load_unreadable_gives_default() {
        let store = DocumentStore::new(UnreadableStorage, DEFAULT_STORAGE_KEY);
        assert_eq!(store.load(), Workspace::default());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut store = DocumentStore::new(UnreadableStorage, DEFAULT_STORAGE_KEY);
        let err = store.save(&Workspace::default()).unwrap_err();
        assert!(matches!(err, StoreError::StorageWriteFailed(_)));
    }

    #[test]
    fn test_load_legacy_array() {
        let store = store_with(r#"[{"title":"a","content":"one"},{"title":"b","content":"two"}]"#);
        let ws = store.load();
        assert_eq!(ws.len(), 2);
        assert_eq!(ws.active_index(), 0);
        assert_eq!(ws.documents()[1].content, "two");
    }

    #[test]
    fn test_load_clamps_active_index() {
        let store = store_with(r#"{"documents":[{"title":"a","content":""}],"active_index":4}"#);
        assert_eq!(store.load().active_index(), 0);
    }

    #[test]
    fn test_round_trip() {
        let mut ws = Workspace::default();
        ws.update_content(0, "Hello\nworld".into()).unwrap();
        ws.push(Document::imported("notes.txt", "line one\nline two"));
        ws.add_document("third", "  spaced  ");
        ws.set_active(1).unwrap();

        let mut store = DocumentStore::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        store.save(&ws).unwrap();
        assert_eq!(store.load(), ws);

        // Saving again is idempotent
        store.save(&ws).unwrap();
        assert_eq!(store.load(), ws);
    }

    #[test]
    fn test_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = Workspace::default();
        ws.add_document("second", "ünïcödé ✓");

        let mut store = DocumentStore::new(FileStorage::new(dir.path()), "custom_key");
        store.save(&ws).unwrap();

        let reopened = DocumentStore::new(FileStorage::new(dir.path()), "custom_key");
        assert_eq!(reopened.load(), ws);
    }
}
