//! Emergency-alert feed client library.
//!
//! This crate fetches and parses the public alert feed polled by the
//! alert monitor. The feed serves an empty body while no alert is active
//! and a single JSON document while one is.
//!
//! # Example
//!
//! ```no_run
//! use alert_feed::{FeedClient, FeedConfig};
//!
//! # async fn example() -> Result<(), alert_feed::FeedError> {
//! let client = FeedClient::new(FeedConfig::default())?;
//!
//! if let Some(alert) = client.fetch_active().await? {
//!     println!("Alert {}: {} places affected", alert.id, alert.places.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{sanitize_payload, FeedClient};
pub use config::FeedConfig;
pub use error::FeedError;
pub use types::{Alert, REGION_WILDCARD};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
