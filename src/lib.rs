//! Imperium - a fuzzy command palette for stored shell snippets
//!
//! This library loads a corpus of command records, fuzzy-matches a typed
//! query against it, and drives an interactive selection session whose pick
//! is copied to the clipboard.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod search;
pub mod session;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ImpError {
    /// Command store error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Terminal or clipboard error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
