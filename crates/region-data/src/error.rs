//! Error types for region-data.

use thiserror::Error;

/// Errors that can occur while loading or refreshing the reference dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dataset body was not structurally valid.
    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Reading or writing the persisted copy failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
