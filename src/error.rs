//! Error types for pixur_client

use crate::models::PicId;
use thiserror::Error;

/// Unified error type for pic fetching, caching and uploads
#[derive(Debug, Error)]
pub enum PicError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code, with whatever body the server sent
    #[error("HTTP error: {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Reading an upload file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Server returned an empty page for a single pic lookup
    #[error("Pic not found: {0}")]
    PicNotFound(PicId),
    /// Upload called with neither a file nor a url
    #[error("Upload needs a file or a url")]
    EmptyUpload,
    /// Cache requested with zero capacity
    #[error("Invalid capacity {capacity} for cache '{name}'")]
    InvalidCapacity { name: String, capacity: usize },
    /// Cache name already registered with different key/value types
    #[error("Cache '{0}' is already registered with different types")]
    CacheTypeMismatch(String),
}

/// Result alias for pixur_client operations
pub type Result<T> = std::result::Result<T, PicError>;
