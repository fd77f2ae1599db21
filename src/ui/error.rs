//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal setup, drawing or event reading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The system clipboard could not be opened or written
    #[error("Clipboard error: {0}")]
    ClipboardError(#[from] arboard::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
