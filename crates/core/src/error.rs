//! Error types for document ingestion.
//!
//! Normalization and structure extraction are total and never fail; these
//! errors only come from the I/O edges (reading input, writing artifacts).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a document or persisting artifacts.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input document does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input bytes are not valid UTF-8.
    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    /// Failed to serialize or parse a structure record.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
