//! Place-to-region classification.

use indexmap::IndexMap;

use crate::normalize::normalize_place;
use crate::types::{ReferenceDataset, GENERAL_REGION};

/// Places grouped by region. Iteration order is insertion order; display
/// ordering is the formatter's responsibility.
pub type ClassifiedResult = IndexMap<String, Vec<String>>;

/// Group a list of places by their containing region.
///
/// Regions are scanned in the dataset's declared order and the first
/// matching region wins. Places found in no region go to [`GENERAL_REGION`].
pub fn classify(dataset: &ReferenceDataset, places: &[String]) -> ClassifiedResult {
    let mut result = ClassifiedResult::new();

    for place in places {
        let name = normalize_place(place);

        let region = dataset
            .areas
            .iter()
            .find(|(_, members)| members.contains(name.as_str()))
            .map(|(region, _)| region.as_str())
            .unwrap_or(GENERAL_REGION);

        result.entry(region.to_string()).or_default().push(name);
    }

    result
}
