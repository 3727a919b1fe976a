//! Alert-processing pipeline.
//!
//! This crate ties the feed, reference dataset, and messaging gateway into
//! the monitor loop: poll the feed on a fixed cadence, filter and dedup
//! alerts, classify the affected places into regions, format a message, and
//! fan it out concurrently to the configured recipients.
//!
//! # Example
//!
//! ```no_run
//! use alert_feed::FeedClient;
//! use alert_monitor::{Monitor, MonitorConfig, Notifier};
//! use region_data::DatasetCache;
//! use wa_gateway::GatewayClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MonitorConfig::from_env()?;
//!
//! let gateway = GatewayClient::connect(config.gateway.clone()).await?;
//! let feed = FeedClient::new(config.feed.clone())?;
//! let cache = DatasetCache::new(config.dataset.clone())?;
//! let notifier = Notifier::new(gateway, config.recipients.clone(), config.operator.clone());
//!
//! let monitor = Monitor::new(feed, cache, notifier, &config);
//! monitor.run(std::future::pending()).await?;
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod config;
pub mod dedup;
pub mod error;
pub mod formatting;
pub mod monitor;
pub mod notifier;
pub mod sender;

pub use audit::AuditLog;
pub use config::{ConfigError, MonitorConfig};
pub use dedup::SeenAlerts;
pub use error::MonitorError;
pub use formatting::{format_alert, format_regions, INTRO_PHRASE};
pub use monitor::{CycleOutcome, Monitor};
pub use notifier::{DeliveryOutcome, Notifier};
pub use sender::{MessageSender, NoOpSender};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
