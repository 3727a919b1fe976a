//! Integration tests for wa-gateway.
//!
//! These tests require a Green API instance for the live send tests.
//! Set GREEN_API_INSTANCE / GREEN_API_TOKEN and run ignored tests:
//!   cargo test --test integration_tests -- --ignored

use std::env;

use wa_gateway::{GatewayClient, GatewayConfig, GatewayError, SendParams};

/// Helper to get a configured gateway from the environment.
fn config_from_env() -> Option<GatewayConfig> {
    let instance = env::var("GREEN_API_INSTANCE").ok()?;
    let token = env::var("GREEN_API_TOKEN").ok()?;
    Some(GatewayConfig::new(instance, token))
}

// ============================================================================
// Unit tests (no gateway required)
// ============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_gateway_config_new() {
        let config = GatewayConfig::new("1101000001", "token123");
        assert_eq!(config.base_url, "https://api.green-api.com");
        assert_eq!(config.instance_id, "1101000001");
        assert_eq!(config.api_token, "token123");
    }

    #[test]
    fn test_gateway_config_with_base_url() {
        let config = GatewayConfig::with_base_url("http://127.0.0.1:3000", "42", "t");
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn test_gateway_config_urls() {
        let config = GatewayConfig::new("1101000001", "token123");
        assert_eq!(
            config.send_url(),
            "https://api.green-api.com/waInstance1101000001/sendMessage/token123"
        );
        assert_eq!(
            config.state_url(),
            "https://api.green-api.com/waInstance1101000001/getStateInstance/token123"
        );
    }
}

mod send_params_tests {
    use super::*;

    #[test]
    fn test_send_params_text() {
        let params = SendParams::text("120363000000000000@g.us", "Hello");
        assert_eq!(params.chat_id, "120363000000000000@g.us");
        assert_eq!(params.message, "Hello");
    }

    #[test]
    fn test_send_params_serialization() {
        let params = SendParams::text("972501234567@c.us", "line one\r\nline two");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["chatId"], "972501234567@c.us");
        assert_eq!(json["message"], "line one\r\nline two");
    }
}

// ============================================================================
// Integration tests (require a gateway instance)
// ============================================================================

mod gateway_connection_tests {
    use super::*;

    /// Test connection failure against a port nothing listens on.
    #[tokio::test]
    async fn test_connect_failure() {
        let config = GatewayConfig::with_base_url("http://127.0.0.1:59999", "1", "t");
        let result = GatewayClient::connect(config).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            GatewayError::Http(_) => {}
            e => panic!("Unexpected error type: {:?}", e),
        }
    }

    /// Test instance state against a live gateway.
    #[tokio::test]
    #[ignore = "requires GREEN_API_INSTANCE and GREEN_API_TOKEN"]
    async fn test_instance_state() {
        let _ = dotenvy::dotenv();
        let config = config_from_env().expect("gateway env vars not set");
        let client = GatewayClient::connect(config).await.unwrap();
        assert!(client.is_connected());
    }

    /// Test sending a message to a live recipient.
    /// Set TEST_RECIPIENT env var to run.
    #[tokio::test]
    #[ignore = "requires gateway instance and TEST_RECIPIENT"]
    async fn test_send_message() {
        let _ = dotenvy::dotenv();
        let recipient = env::var("TEST_RECIPIENT").expect("TEST_RECIPIENT not set");

        let config = config_from_env().expect("gateway env vars not set");
        let client = GatewayClient::connect(config).await.unwrap();

        let result = client
            .send_text(&recipient, "Test message from integration tests")
            .await;

        assert!(result.is_ok(), "Failed to send: {:?}", result.err());
        let send_result = result.unwrap();
        assert!(!send_result.id_message.is_empty());
    }
}
