//! Error types for swimlog-core

use thiserror::Error;

/// Main error type for the swimlog-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Parse error for export files
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Result type alias for swimlog-core
pub type Result<T> = std::result::Result<T, Error>;
