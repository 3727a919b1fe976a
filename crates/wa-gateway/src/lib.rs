//! WhatsApp gateway client library.
//!
//! This crate provides a Rust client for sending messages through a
//! Green API compatible WhatsApp gateway over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use wa_gateway::{GatewayClient, GatewayConfig};
//!
//! # async fn example() -> Result<(), wa_gateway::GatewayError> {
//! let config = GatewayConfig::new("1101000001", "d75b3a66374942c5b3c019c698abc2067e151558acbd412b");
//! let client = GatewayClient::connect(config).await?;
//!
//! let result = client.send_text("120363000000000000@g.us", "Hello!").await?;
//! println!("Sent message: {}", result.id_message);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::GatewayClient;
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use types::{SendParams, SendResult, StateResponse};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
