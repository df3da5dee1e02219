//! Core error types for Umbra

use thiserror::Error;

/// Main error type for Umbra operations
#[derive(Error, Debug)]
pub enum UmbraError {
    #[error("invalid interval: end {end} precedes start {start}")]
    InvalidInterval { start: u32, end: u32 },

    #[error("invalid sequence length: {0}")]
    InvalidLength(u32),

    #[error("unknown accession: {0}")]
    UnknownAccession(String),

    #[error("inconsistent annotation shape: {0}")]
    InconsistentAnnotationShape(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type alias for Umbra operations
pub type UmbraResult<T> = Result<T, UmbraError>;

impl From<serde_json::Error> for UmbraError {
    fn from(err: serde_json::Error) -> Self {
        UmbraError::Serialization(err.to_string())
    }
}
