//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the product store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the store document.
    #[error("Failed to read store: {0}")]
    ReadError(String),

    /// Failed to write the store document.
    #[error("Failed to write store: {0}")]
    WriteError(String),

    /// The store document is not valid JSON.
    #[error("Failed to parse store: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::ParseError(e.to_string())
    }
}
