//! Green API gateway HTTP client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::types::{SendParams, SendResult, StateResponse};

/// Request timeout applied to every gateway call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for communicating with the messaging gateway.
#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    config: GatewayConfig,
    connected: Arc<AtomicBool>,
}

impl GatewayClient {
    /// Build a client without contacting the gateway.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GatewayError::Http)?;

        Ok(Self {
            http,
            config,
            connected: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Build a client and verify the instance is authorized.
    pub async fn connect(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = Self::new(config)?;

        let state = client.instance_state().await?;
        if !state.is_authorized() {
            return Err(GatewayError::NotAuthorized(state.state_instance));
        }

        client.connected.store(true, Ordering::SeqCst);
        info!("Connected to gateway at {}", client.config.base_url);
        Ok(client)
    }

    /// Check if the instance was authorized at connect time.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Query the gateway instance state.
    pub async fn instance_state(&self) -> Result<StateResponse, GatewayError> {
        let url = self.config.state_url();
        debug!("Instance state check");

        let response = self.http.get(&url).send().await.map_err(GatewayError::Http)?;

        let status = response.status();
        if !status.is_success() {
            self.connected.store(false, Ordering::SeqCst);
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(GatewayError::Http)
    }

    /// Send a text message to a chat (group or individual).
    pub async fn send_text(
        &self,
        recipient: &str,
        message: &str,
    ) -> Result<SendResult, GatewayError> {
        let params = SendParams::text(recipient, message);
        let url = self.config.send_url();
        debug!(recipient = %recipient, "Sending message");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&params)
            .send()
            .await
            .map_err(GatewayError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(GatewayError::Http)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.config.base_url)
            .field("instance_id", &self.config.instance_id)
            .field("connected", &self.is_connected())
            .finish()
    }
}
