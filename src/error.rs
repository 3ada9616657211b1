//! Error types for the Glossa transcript annotator.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Glossa operations.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// The requested language is not in the supported set.
    #[error("Unsupported language: {0} (expected english, spanish or french)")]
    UnsupportedLanguage(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// The annotation pipeline failed to load or run.
    #[error("Annotation pipeline error: {0}")]
    Model(#[from] nlprule::Error),
}

/// Result type alias for Glossa operations.
pub type Result<T> = std::result::Result<T, GlossaError>;

impl From<serde_json::Error> for GlossaError {
    fn from(err: serde_json::Error) -> Self {
        GlossaError::Config(err.to_string())
    }
}
