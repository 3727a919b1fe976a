//! Configuration types for wa-gateway.

/// Configuration for connecting to the Green API gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the gateway HTTP API (e.g., "https://api.green-api.com").
    pub base_url: String,
    /// Gateway instance identifier.
    pub instance_id: String,
    /// API token for the instance.
    pub api_token: String,
}

impl GatewayConfig {
    /// Create a new configuration for the public gateway host.
    pub fn new(instance_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.green-api.com".to_string(),
            instance_id: instance_id.into(),
            api_token: api_token.into(),
        }
    }

    /// Create a configuration with a custom base URL (self-hosted gateway).
    pub fn with_base_url(
        base_url: impl Into<String>,
        instance_id: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            instance_id: instance_id.into(),
            api_token: api_token.into(),
        }
    }

    /// Get the sendMessage endpoint URL.
    pub fn send_url(&self) -> String {
        format!(
            "{}/waInstance{}/sendMessage/{}",
            self.base_url, self.instance_id, self.api_token
        )
    }

    /// Get the instance state endpoint URL.
    pub fn state_url(&self) -> String {
        format!(
            "{}/waInstance{}/getStateInstance/{}",
            self.base_url, self.instance_id, self.api_token
        )
    }
}
