//! Error types for I/O operations

use thiserror::Error;

/// Errors that can occur while loading rasters or configuration
#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<IoError> for paintcloud_core::Error {
    fn from(err: IoError) -> Self {
        match err {
            IoError::Io(e) => paintcloud_core::Error::Io(e),
            IoError::UnsupportedFormat { format } => {
                paintcloud_core::Error::Unsupported(format!("format {}", format))
            }
            IoError::ConfigParse(e) => paintcloud_core::Error::Config(e.to_string()),
            other => paintcloud_core::Error::InvalidData(other.to_string()),
        }
    }
}
