//! Error types for mercado core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and hints.

use thiserror::Error;

/// Result type alias for mercado operations.
pub type Result<T> = std::result::Result<T, MercadoError>;

/// Core error type for mercado operations.
#[derive(Debug, Error)]
pub enum MercadoError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Persisted state failed an integrity check
    #[error("Corrupt store: {0}")]
    Corrupt(String),

    /// A bolívar conversion was requested without a usable exchange rate
    #[error("No usable exchange rate is set")]
    RateUnavailable,
}

impl From<std::io::Error> for MercadoError {
    fn from(err: std::io::Error) -> Self {
        MercadoError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for MercadoError {
    fn from(err: rusqlite::Error) -> Self {
        MercadoError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for MercadoError {
    fn from(err: serde_json::Error) -> Self {
        MercadoError::Storage(err.to_string())
    }
}
