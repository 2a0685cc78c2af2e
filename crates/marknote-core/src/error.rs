//! Error types for marknote-core

use thiserror::Error;

/// Result type alias using marknote-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in marknote-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key-value storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failure reported by a markdown renderer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Render error: {0}")]
pub struct RenderError(pub String);
