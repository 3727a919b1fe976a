//! Concurrent notification fan-out.

use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;
use tracing::{error, info};

use crate::sender::MessageSender;

/// Default timeout for a single delivery attempt.
const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of one delivery attempt within a fan-out call.
#[derive(Debug, Clone)]
pub struct DeliveryOutcome {
    /// The recipient this attempt targeted.
    pub recipient: String,
    /// Success, or the failure reason.
    pub result: Result<(), String>,
}

impl DeliveryOutcome {
    /// Whether this attempt succeeded.
    pub fn delivered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Delivers messages to the configured recipients and the operator channel.
pub struct Notifier<S> {
    sender: S,
    recipients: Vec<String>,
    operator: String,
    send_timeout: Duration,
}

impl<S: MessageSender> Notifier<S> {
    /// Create a notifier over a sender, recipient list, and operator id.
    pub fn new(sender: S, recipients: Vec<String>, operator: impl Into<String>) -> Self {
        Self {
            sender,
            recipients,
            operator: operator.into(),
            send_timeout: DEFAULT_SEND_TIMEOUT,
        }
    }

    /// Override the per-attempt delivery timeout.
    pub fn with_send_timeout(mut self, send_timeout: Duration) -> Self {
        self.send_timeout = send_timeout;
        self
    }

    /// Number of configured recipients.
    pub fn recipient_count(&self) -> usize {
        self.recipients.len()
    }

    /// Deliver `text` to every configured recipient concurrently.
    ///
    /// Each attempt is independent: a failure or timeout for one recipient
    /// never blocks, cancels, or fails the others. Exactly one attempt per
    /// recipient per call; there is no retry. Every outcome is logged and
    /// returned.
    pub async fn notify_all(&self, text: &str) -> Vec<DeliveryOutcome> {
        let attempts = self.recipients.iter().map(|recipient| async move {
            let result = match timeout(self.send_timeout, self.sender.send(recipient, text)).await
            {
                Ok(Ok(())) => {
                    info!(recipient = %recipient, "Notification delivered");
                    Ok(())
                }
                Ok(Err(e)) => {
                    error!(recipient = %recipient, "Delivery failed: {}", e);
                    Err(e.to_string())
                }
                Err(_) => {
                    error!(recipient = %recipient, "Delivery timed out after {:?}", self.send_timeout);
                    Err(format!("timed out after {:?}", self.send_timeout))
                }
            };

            DeliveryOutcome {
                recipient: recipient.clone(),
                result,
            }
        });

        join_all(attempts).await
    }

    /// Deliver a message to the operator channel only.
    ///
    /// Used for startup, dataset-update, and error notices. Failure is
    /// logged and swallowed; operator messages are never retried.
    pub async fn notify_operator(&self, text: &str) {
        match timeout(self.send_timeout, self.sender.send(&self.operator, text)).await {
            Ok(Ok(())) => info!(operator = %self.operator, "Operator notified"),
            Ok(Err(e)) => error!(operator = %self.operator, "Failed to notify operator: {}", e),
            Err(_) => {
                error!(operator = %self.operator, "Operator notification timed out after {:?}", self.send_timeout)
            }
        }
    }
}
