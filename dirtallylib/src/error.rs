//! Error types for dirtallylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning or rendering a census
#[derive(Error, Debug)]
pub enum TallyError {
    /// Scan root does not exist
    #[error("root directory does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Scan root exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Unsupported output format name
    #[error("unknown output format '{0}' (expected tsv, csv, or json)")]
    InvalidFormat(String),

    /// JSON output needs a header to supply field names
    #[error("a header is required for json output")]
    HeaderRequired,

    /// JSON serialization failure
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
