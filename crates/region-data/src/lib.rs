//! Region reference dataset library.
//!
//! This crate owns the region-to-places reference table used to classify
//! alert locations: loading and refreshing it through a conditional-fetch
//! cache with a persisted local fallback, normalizing place names, and
//! grouping places by region.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use region_data::{classify, DatasetCache, DatasetConfig};
//!
//! # async fn example() -> Result<(), region_data::DatasetError> {
//! let config = DatasetConfig::new("https://example.com/regions.json", "./data");
//! let mut cache = DatasetCache::new(config)?;
//! cache.maybe_refresh(Utc::now()).await;
//!
//! if let Some(dataset) = cache.dataset() {
//!     let grouped = classify(dataset, &["Tel Aviv".to_string()]);
//!     println!("{} regions affected", grouped.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod classify;
pub mod config;
pub mod error;
pub mod normalize;
pub mod types;

pub use cache::{DatasetCache, RefreshOutcome};
pub use classify::{classify, ClassifiedResult};
pub use config::DatasetConfig;
pub use error::DatasetError;
pub use normalize::normalize_place;
pub use types::{ReferenceDataset, GENERAL_REGION};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
