//! Configuration types for alert-feed.

/// Configuration for the alert feed endpoint.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// URL of the active-alert feed.
    pub url: String,
}

impl FeedConfig {
    /// Create a new configuration with the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new("https://www.oref.org.il/WarningMessages/alert/alerts.json")
    }
}
