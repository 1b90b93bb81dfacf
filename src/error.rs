// src/error.rs

//! Error types shared across the plugin crate

use thiserror::Error;

/// Errors surfaced by the library
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration failed validation; carries the operator-facing message
    #[error("{0}")]
    ConfigInvalid(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;
