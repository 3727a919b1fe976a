//! Error types for wa-gateway.

use thiserror::Error;

/// Errors that can occur when interacting with the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway returned a non-success status.
    #[error("gateway rejected request: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Gateway instance is not authorized.
    #[error("gateway instance not authorized: {0}")]
    NotAuthorized(String),
}
