//! Centralized error types for CrisisLens.

use thiserror::Error;

/// Main error type for CrisisLens operations.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("Unsupported media type '{0}'. Only JPEG and PNG images are supported.")]
    UnsupportedMediaType(String),

    #[error("Invalid image file: {0}")]
    InvalidImage(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("Model returned invalid JSON.")]
    InvalidModelOutput,

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("No text content in model response")]
    NoContent,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for CrisisLens operations.
pub type LensResult<T> = Result<T, LensError>;

impl LensError {
    /// Create a service unavailable error with a remediation message.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::ServiceUnavailable(msg.into())
    }
}
