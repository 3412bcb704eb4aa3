//! Error types for daymark.

use thiserror::Error;

/// The one failure a user can trigger when submitting a new event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
}

/// Errors that can occur in daymark operations.
#[derive(Error, Debug)]
pub enum DaymarkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{0} export is not supported")]
    Unsupported(String),
}

impl From<serde_json::Error> for DaymarkError {
    fn from(e: serde_json::Error) -> Self {
        DaymarkError::Serialization(e.to_string())
    }
}

/// Result type alias for daymark operations.
pub type DaymarkResult<T> = Result<T, DaymarkError>;
