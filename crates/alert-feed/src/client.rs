//! Alert feed HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::types::Alert;

/// Request timeout applied to every feed fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed request headers the feed expects from a browser client.
const REFERER: &str = "https://www.oref.org.il/";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/78.0.3904.97 Safari/537.36";

/// Strip transport artifacts from a raw feed body.
///
/// Removes one leading byte-order mark, embedded NUL bytes, and surrounding
/// whitespace. Pure string transform.
pub fn sanitize_payload(body: &str) -> String {
    body.strip_prefix('\u{feff}')
        .unwrap_or(body)
        .replace('\0', "")
        .trim()
        .to_string()
}

/// Client for polling the active-alert feed.
#[derive(Clone)]
pub struct FeedClient {
    http: Client,
    config: FeedConfig,
}

impl FeedClient {
    /// Build a feed client.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FeedError::Http)?;

        Ok(Self { http, config })
    }

    /// Fetch the currently active alert, if any.
    ///
    /// An empty or whitespace-only body is the steady-state "no active alert"
    /// signal and returns `Ok(None)`. A non-empty body must parse into an
    /// alert carrying an id, otherwise the payload is rejected as malformed.
    pub async fn fetch_active(&self) -> Result<Option<Alert>, FeedError> {
        let response = self
            .http
            .get(&self.config.url)
            .header("Referer", REFERER)
            .header("User-Agent", USER_AGENT)
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(FeedError::Http)?
            .error_for_status()
            .map_err(FeedError::Http)?;

        let body = response.text().await.map_err(FeedError::Http)?;
        let payload = sanitize_payload(&body);

        if payload.is_empty() {
            debug!("No active alerts");
            return Ok(None);
        }

        let alert = Alert::parse(&payload)?;
        debug!(id = %alert.id, places = alert.places.len(), "Parsed active alert");
        Ok(Some(alert))
    }

    /// Get the configuration.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }
}

impl std::fmt::Debug for FeedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedClient")
            .field("url", &self.config.url)
            .finish()
    }
}
