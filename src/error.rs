//! Error types for signstream.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignstreamError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Session errors
    #[error("Landmark vector has {actual} features, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid frame: {message}")]
    InvalidFrame { message: String },

    #[error("Classification failed: {message}")]
    Classification { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

impl SignstreamError {
    /// True for per-frame errors where the frame is dropped and the
    /// session keeps running with its buffers untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SignstreamError::InvalidFrame { .. } | SignstreamError::Classification { .. }
        )
    }
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SignstreamError>;
