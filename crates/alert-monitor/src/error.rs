//! Error types for the alert monitor.

use thiserror::Error;

/// Errors that can occur in the monitor pipeline.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Alert feed error.
    #[error("feed error: {0}")]
    Feed(#[from] alert_feed::FeedError),

    /// Messaging gateway error.
    #[error("gateway error: {0}")]
    Gateway(#[from] wa_gateway::GatewayError),

    /// Message sending failed.
    #[error("send failed: {0}")]
    SendFailed(String),
}
