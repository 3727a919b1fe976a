//! Reference dataset cache: disk load, conditional refresh, atomic persist.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use tracing::{error, info, warn};

use crate::config::DatasetConfig;
use crate::error::DatasetError;
use crate::types::ReferenceDataset;

/// Request timeout applied to every dataset fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a refresh attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new dataset was fetched, installed, and persisted.
    Updated,
    /// The host confirmed the stored copy is current.
    NotModified,
    /// The cooldown window has not elapsed; nothing was attempted.
    SkippedCooldown,
    /// The attempt failed; the previous dataset remains authoritative.
    Failed,
}

/// Cache for the region reference dataset.
///
/// Loads a persisted local copy at construction, revalidates it against the
/// dataset host at most once per cooldown window, and keeps the previous
/// in-memory copy on any refresh failure.
pub struct DatasetCache {
    http: Client,
    config: DatasetConfig,
    current: Option<ReferenceDataset>,
    last_attempt: Option<DateTime<Utc>>,
}

impl DatasetCache {
    /// Build the cache and load the persisted local copy, if present.
    pub fn new(config: DatasetConfig) -> Result<Self, DatasetError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(DatasetError::Http)?;

        let mut cache = Self {
            http,
            config,
            current: None,
            last_attempt: None,
        };
        cache.load_from_disk();
        Ok(cache)
    }

    /// The current dataset. `None` means no local copy and no successful
    /// fetch yet; downstream processing must treat this as "not ready".
    pub fn dataset(&self) -> Option<&ReferenceDataset> {
        self.current.as_ref()
    }

    /// Whether enough time has passed since the last refresh attempt.
    pub fn is_refresh_due(&self, now: DateTime<Utc>) -> bool {
        match self.last_attempt {
            None => true,
            Some(at) => now - at >= self.config.refresh_cooldown,
        }
    }

    /// Refresh the dataset if the cooldown window has elapsed.
    ///
    /// The cooldown advances on every attempt, successful or not, so an
    /// unreachable host is retried at most once per window.
    pub async fn maybe_refresh(&mut self, now: DateTime<Utc>) -> RefreshOutcome {
        if !self.is_refresh_due(now) {
            return RefreshOutcome::SkippedCooldown;
        }
        self.last_attempt = Some(now);

        match self.refresh(now).await {
            Ok(Some(regions)) => {
                info!(regions, "Reference dataset updated");
                RefreshOutcome::Updated
            }
            Ok(None) => {
                info!("Reference dataset not modified");
                RefreshOutcome::NotModified
            }
            Err(e) => {
                error!("Reference dataset refresh failed: {}", e);
                RefreshOutcome::Failed
            }
        }
    }

    async fn refresh(&mut self, now: DateTime<Utc>) -> Result<Option<usize>, DatasetError> {
        let mut request = self.http.get(&self.config.url);

        // Revalidate only when a usable copy exists; a 304 with nothing
        // loaded would leave the cache empty.
        if let Some(etag) = self.current.as_ref().and_then(|d| d.etag.as_deref()) {
            request = request.header("If-None-Match", etag);
        }

        let response = request.send().await.map_err(DatasetError::Http)?;
        if response.status() == StatusCode::NOT_MODIFIED {
            return Ok(None);
        }
        let response = response.error_for_status().map_err(DatasetError::Http)?;

        let etag = response
            .headers()
            .get(reqwest::header::ETAG)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(DatasetError::Http)?;

        let mut dataset = ReferenceDataset::from_json(strip_bom(&body), now)?;
        dataset.etag = etag.clone();

        self.persist(&body, etag.as_deref())?;

        let regions = dataset.region_count();
        self.current = Some(dataset);
        Ok(Some(regions))
    }

    fn load_from_disk(&mut self) {
        let body = match fs::read_to_string(&self.config.data_path) {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No local dataset copy at {}", self.config.data_path.display());
                return;
            }
            Err(e) => {
                warn!("Failed to read local dataset copy: {}", e);
                return;
            }
        };

        match ReferenceDataset::from_json(strip_bom(&body), Utc::now()) {
            Ok(mut dataset) => {
                dataset.etag = self.read_etag();
                info!(
                    regions = dataset.region_count(),
                    "Loaded reference dataset from local file"
                );
                self.current = Some(dataset);
            }
            Err(e) => warn!("Local dataset copy is corrupt, ignoring it: {}", e),
        }
    }

    fn read_etag(&self) -> Option<String> {
        fs::read_to_string(&self.config.etag_path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn persist(&self, body: &str, etag: Option<&str>) -> Result<(), DatasetError> {
        if let Some(dir) = self.config.data_path.parent() {
            fs::create_dir_all(dir)?;
        }

        write_replace(&self.config.data_path, body)?;
        match etag {
            Some(tag) => write_replace(&self.config.etag_path, tag)?,
            None => {
                // Host stopped sending a validator; a stale one must not be
                // replayed on the next refresh.
                if let Err(e) = fs::remove_file(&self.config.etag_path) {
                    if e.kind() != ErrorKind::NotFound {
                        return Err(DatasetError::Io(e));
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for DatasetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetCache")
            .field("url", &self.config.url)
            .field("loaded", &self.current.is_some())
            .field("last_attempt", &self.last_attempt)
            .finish()
    }
}

fn strip_bom(body: &str) -> &str {
    body.strip_prefix('\u{feff}').unwrap_or(body)
}

/// Write `contents` next to `path` and rename over it, so readers never see
/// a partial file.
fn write_replace(path: &Path, contents: &str) -> Result<(), DatasetError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
