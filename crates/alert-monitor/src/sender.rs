//! Message sender trait and implementations.

use async_trait::async_trait;
use wa_gateway::GatewayClient;

use crate::error::MonitorError;

/// Trait for delivering a text message to one recipient.
///
/// Abstracted to support different transports (gateway, tests, etc.)
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send a text message.
    ///
    /// # Arguments
    /// * `recipient` - Opaque chat or operator identifier
    /// * `text` - Message content
    async fn send(&self, recipient: &str, text: &str) -> Result<(), MonitorError>;
}

#[async_trait]
impl MessageSender for GatewayClient {
    async fn send(&self, recipient: &str, text: &str) -> Result<(), MonitorError> {
        self.send_text(recipient, text)
            .await
            .map(|_| ())
            .map_err(MonitorError::Gateway)
    }
}

/// A no-op message sender for testing that discards all messages.
#[derive(Debug, Clone, Default)]
pub struct NoOpSender;

#[async_trait]
impl MessageSender for NoOpSender {
    async fn send(&self, _recipient: &str, _text: &str) -> Result<(), MonitorError> {
        Ok(())
    }
}
