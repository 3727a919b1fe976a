//! Reference dataset data model.

use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::error::DatasetError;
use crate::normalize::normalize_place;

/// Catch-all region for places not found in any defined region.
pub const GENERAL_REGION: &str = "General";

/// Wire/disk form of the dataset: a region-to-places table.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    areas: IndexMap<String, Vec<String>>,
}

/// The region-to-places reference table used for classification.
///
/// Region iteration order is the dataset's declared order and is stable
/// across calls; the classifier depends on that for first-match-wins.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    /// Region name to normalized member place names.
    pub areas: IndexMap<String, IndexSet<String>>,
    /// When this copy was fetched or loaded.
    pub fetched_at: DateTime<Utc>,
    /// Cache validator returned by the dataset host, if any.
    pub etag: Option<String>,
}

impl ReferenceDataset {
    /// Parse a dataset from its JSON body, normalizing place names.
    pub fn from_json(body: &str, fetched_at: DateTime<Utc>) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(body)?;

        let areas = file
            .areas
            .into_iter()
            .map(|(region, places)| {
                let members: IndexSet<String> =
                    places.iter().map(|p| normalize_place(p)).collect();
                (region, members)
            })
            .collect();

        Ok(Self {
            areas,
            fetched_at,
            etag: None,
        })
    }

    /// Number of regions in the table.
    pub fn region_count(&self) -> usize {
        self.areas.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_normalizes_places() {
        let body = r#"{"areas": {"South": ["Be'er Sheva", "Sderot (West)"]}}"#;
        let dataset = ReferenceDataset::from_json(body, Utc::now()).unwrap();
        let members = &dataset.areas["South"];
        assert!(members.contains("Beer Sheva"));
        assert!(members.contains("Sderot West"));
    }

    #[test]
    fn test_from_json_preserves_region_order() {
        let body = r#"{"areas": {"North": [], "Center": [], "South": []}}"#;
        let dataset = ReferenceDataset::from_json(body, Utc::now()).unwrap();
        let regions: Vec<&String> = dataset.areas.keys().collect();
        assert_eq!(regions, vec!["North", "Center", "South"]);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(ReferenceDataset::from_json("[]", Utc::now()).is_err());
        assert!(ReferenceDataset::from_json("not json", Utc::now()).is_err());
    }
}
