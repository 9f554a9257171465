//! Error types.

use thiserror::Error;

/// Errors raised while setting up a selection.
///
/// Interaction itself never fails: degenerate and out-of-bounds rectangles
/// are recovered by normalizing and clamping.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for selection setup.
pub type SelectionResult<T> = Result<T, SelectionError>;

impl From<serde_json::Error> for SelectionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for SelectionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
