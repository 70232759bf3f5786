//! Error types for sportcal.

use thiserror::Error;

/// Errors that can occur in sportcal operations.
#[derive(Error, Debug)]
pub enum SportCalError {
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

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Seed error: {0}")]
    Seed(String),
}

impl From<serde_json::Error> for SportCalError {
    fn from(e: serde_json::Error) -> Self {
        SportCalError::Serialization(e.to_string())
    }
}

/// Result type alias for sportcal operations.
pub type SportCalResult<T> = Result<T, SportCalError>;
