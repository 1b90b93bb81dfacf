// src/config/document.rs

//! Loading configuration, profile and unit documents from disk
//!
//! Documents are JSON or TOML; the format is chosen by file extension.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Supported on-disk document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick a format from the file extension
    ///
    /// `.toml` is TOML; `.json` or no extension is JSON. Anything else is
    /// refused rather than guessed.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(DocumentFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(DocumentFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(DocumentFormat::Toml),
            Some(ext) => Err(Error::UnsupportedFormat(format!(
                "{} (expected .json or .toml, got .{})",
                path.display(),
                ext
            ))),
        }
    }
}

/// Parse a document from a string in the given format
pub fn parse_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Toml => Ok(toml::from_str(content)?),
    }
}

/// Read and parse a document from disk
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;
    debug!("Loading {:?} document from {}", format, path.display());
    let content = std::fs::read_to_string(path)?;
    parse_document(&content, format)
}
