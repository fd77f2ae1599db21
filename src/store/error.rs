//! Store-specific error types
//!
//! - **`IoError`**: the store file or its directory could not be read or written
//! - **`JsonError`**: the store file is not valid command JSON

use thiserror::Error;

/// Errors from the command store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error
    #[error("Store I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed store contents or serialization failure
    #[error("Invalid store data: {0}")]
    JsonError(#[from] serde_json::Error),
}
