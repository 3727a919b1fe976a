//! Configuration types for region-data.

use std::path::{Path, PathBuf};

use chrono::Duration;

/// Configuration for the reference dataset cache.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// URL of the reference dataset.
    pub url: String,
    /// Path of the persisted dataset copy.
    pub data_path: PathBuf,
    /// Path of the persisted cache validator.
    pub etag_path: PathBuf,
    /// Minimum time between refresh attempts.
    pub refresh_cooldown: Duration,
}

impl DatasetConfig {
    /// Create a configuration storing the dataset under `data_dir`,
    /// with the default 24-hour refresh cooldown.
    pub fn new(url: impl Into<String>, data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            url: url.into(),
            data_path: data_dir.join("regions.json"),
            etag_path: data_dir.join("regions_etag.txt"),
            refresh_cooldown: Duration::hours(24),
        }
    }

    /// Override the refresh cooldown.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.refresh_cooldown = cooldown;
        self
    }
}
