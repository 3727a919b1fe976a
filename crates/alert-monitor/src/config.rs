//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use alert_feed::{FeedConfig, REGION_WILDCARD};
use region_data::DatasetConfig;
use wa_gateway::GatewayConfig;

/// Alert monitor configuration.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Messaging gateway credentials.
    pub gateway: GatewayConfig,
    /// Alert feed endpoint.
    pub feed: FeedConfig,
    /// Reference dataset cache settings.
    pub dataset: DatasetConfig,
    /// Recipients for alert fan-out.
    pub recipients: Vec<String>,
    /// Operator channel for error and status notices.
    pub operator: String,
    /// Region of interest, or `"*"` for all regions.
    pub region_of_interest: String,
    /// Marker substrings identifying test/drill alerts.
    pub test_markers: Vec<String>,
    /// Target interval between poll cycle starts.
    pub poll_interval: Duration,
    /// Optional path of the received-alert audit log.
    pub audit_path: Option<PathBuf>,
}

impl MonitorConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `GREEN_API_INSTANCE` | Gateway instance id | (required) |
    /// | `GREEN_API_TOKEN` | Gateway API token | (required) |
    /// | `GATEWAY_BASE_URL` | Gateway host | `https://api.green-api.com` |
    /// | `ALERT_RECIPIENTS` | Comma-separated recipient ids | (required) |
    /// | `ALERT_OPERATOR` | Operator channel id | (required) |
    /// | `ALERT_REGION` | Region of interest | `*` |
    /// | `TEST_ALERT_MARKERS` | Comma-separated drill markers | feed drill markers |
    /// | `ALERTS_URL` | Alert feed URL | public feed |
    /// | `REGIONS_URL` | Reference dataset URL | (required) |
    /// | `DATA_DIR` | Directory for persisted dataset state | `./data` |
    /// | `POLL_INTERVAL_SECS` | Poll interval in seconds | `1` |
    /// | `AUDIT_LOG_PATH` | Received-alert audit log path | (disabled) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let instance =
            env::var("GREEN_API_INSTANCE").map_err(|_| ConfigError::MissingInstance)?;
        let token = env::var("GREEN_API_TOKEN").map_err(|_| ConfigError::MissingToken)?;
        let gateway = match env::var("GATEWAY_BASE_URL") {
            Ok(url) => GatewayConfig::with_base_url(url, instance, token),
            Err(_) => GatewayConfig::new(instance, token),
        };

        let recipients = split_list(
            &env::var("ALERT_RECIPIENTS").map_err(|_| ConfigError::MissingRecipients)?,
        );
        if recipients.is_empty() {
            return Err(ConfigError::MissingRecipients);
        }

        let operator = env::var("ALERT_OPERATOR").map_err(|_| ConfigError::MissingOperator)?;

        let region_of_interest =
            env::var("ALERT_REGION").unwrap_or_else(|_| REGION_WILDCARD.to_string());

        let test_markers = env::var("TEST_ALERT_MARKERS")
            .map(|v| split_list(&v))
            .unwrap_or_else(|_| vec!["בדיקה".to_string(), "בדיקה מחזורית".to_string()]);

        let feed = env::var("ALERTS_URL")
            .map(FeedConfig::new)
            .unwrap_or_default();

        let dataset_url = env::var("REGIONS_URL").map_err(|_| ConfigError::MissingDatasetUrl)?;
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let dataset = DatasetConfig::new(dataset_url, data_dir);

        let poll_interval = match env::var("POLL_INTERVAL_SECS") {
            Ok(v) => {
                let secs: u64 = v
                    .parse()
                    .map_err(|_| ConfigError::InvalidInterval(v.clone()))?;
                Duration::from_secs(secs.max(1))
            }
            Err(_) => Duration::from_secs(1),
        };

        let audit_path = env::var("AUDIT_LOG_PATH").ok().map(PathBuf::from);

        Ok(Self {
            gateway,
            feed,
            dataset,
            recipients,
            operator,
            region_of_interest,
            test_markers,
            poll_interval,
            audit_path,
        })
    }
}

/// Split a comma-separated list, dropping empty entries.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GREEN_API_INSTANCE environment variable is required")]
    MissingInstance,

    #[error("GREEN_API_TOKEN environment variable is required")]
    MissingToken,

    #[error("ALERT_RECIPIENTS environment variable is required and must not be empty")]
    MissingRecipients,

    #[error("ALERT_OPERATOR environment variable is required")]
    MissingOperator,

    #[error("REGIONS_URL environment variable is required")]
    MissingDatasetUrl,

    #[error("Invalid POLL_INTERVAL_SECS value: {0}")]
    InvalidInterval(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("a@g.us, b@g.us ,c@g.us"),
            vec!["a@g.us", "b@g.us", "c@g.us"]
        );
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list(" , ,"), Vec::<String>::new());
    }
}
