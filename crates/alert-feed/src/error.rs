//! Error types for alert-feed.

use thiserror::Error;

/// Errors that can occur when fetching or parsing the alert feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload was not structurally valid JSON.
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Payload parsed but carried no alert identifier.
    #[error("alert payload missing id field")]
    MissingId,
}
