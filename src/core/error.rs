//! Error types for the document store

use thiserror::Error;

/// Errors raised by the document store and its persistence provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage is unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to write storage: {0}")]
    StorageWriteFailed(String),

    #[error("You must have at least one document.")]
    LastDocument,

    #[error("Document index {index} is out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
