//! Error types for paintcloud

use thiserror::Error;

/// Main error type for paintcloud operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type alias for paintcloud operations
pub type Result<T> = std::result::Result<T, Error>;
