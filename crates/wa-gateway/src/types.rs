//! Request and response types for the gateway API.

use serde::{Deserialize, Serialize};

/// Parameters for sending a text message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendParams {
    /// Chat identifier (group or individual).
    pub chat_id: String,

    /// The message text.
    pub message: String,
}

impl SendParams {
    /// Create send params for a text message to a chat.
    pub fn text(chat_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message: message.into(),
        }
    }
}

/// Result of a successful send.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResult {
    /// Gateway-assigned message identifier.
    pub id_message: String,
}

/// Instance state response from the gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    /// Instance state (e.g., "authorized").
    pub state_instance: String,
}

impl StateResponse {
    /// Check whether the instance is ready to send messages.
    pub fn is_authorized(&self) -> bool {
        self.state_instance == "authorized"
    }
}
