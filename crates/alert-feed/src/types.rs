//! Alert data model.

use serde_json::Value;

use crate::error::FeedError;

/// Wildcard value for the configured region of interest.
pub const REGION_WILDCARD: &str = "*";

/// One published emergency alert.
///
/// Identity is the `id` field; an alert is immutable once received.
#[derive(Debug, Clone)]
pub struct Alert {
    /// Opaque alert identifier.
    pub id: String,
    /// Human-readable alert title.
    pub title: String,
    /// Region tag embedded in the payload, when the feed provides one.
    pub region_tag: Option<String>,
    /// Affected place names, in feed order.
    pub places: Vec<String>,
    /// The original payload.
    pub raw: Value,
}

impl Alert {
    /// Parse an alert from a sanitized feed payload.
    ///
    /// Rejects payloads that are not valid JSON or carry no `id` field.
    /// Parsing is structural only; unknown fields are kept in `raw`.
    pub fn parse(payload: &str) -> Result<Self, FeedError> {
        let raw: Value = serde_json::from_str(payload)?;

        let id = match &raw["id"] {
            Value::String(s) if !s.is_empty() => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return Err(FeedError::MissingId),
        };

        let title = raw["title"].as_str().unwrap_or_default().to_string();
        let region_tag = raw["region"].as_str().map(str::to_string);
        let places = raw["data"]
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|v| v.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            id,
            title,
            region_tag,
            places,
            raw,
        })
    }

    /// Check whether this alert falls inside the configured region of interest.
    ///
    /// Matches when the configured region is the wildcard, when the embedded
    /// region tag equals it, or, for feeds that omit the tag, when the place
    /// list contains it.
    pub fn matches_region(&self, region_of_interest: &str) -> bool {
        if region_of_interest == REGION_WILDCARD {
            return true;
        }
        match &self.region_tag {
            Some(tag) => tag == region_of_interest,
            None => self.places.iter().any(|p| p == region_of_interest),
        }
    }

    /// Check whether this is a test/drill alert.
    ///
    /// True when any place entry contains one of the configured marker
    /// substrings.
    pub fn is_test(&self, markers: &[String]) -> bool {
        self.places
            .iter()
            .any(|place| markers.iter().any(|marker| place.contains(marker)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(id: &str, places: &[&str]) -> String {
        serde_json::json!({
            "id": id,
            "cat": "1",
            "title": "Rocket fire",
            "data": places,
            "desc": "Take shelter",
        })
        .to_string()
    }

    #[test]
    fn test_parse_alert() {
        let alert = Alert::parse(&payload("133042", &["Tel Aviv", "Holon"])).unwrap();
        assert_eq!(alert.id, "133042");
        assert_eq!(alert.title, "Rocket fire");
        assert_eq!(alert.places, vec!["Tel Aviv", "Holon"]);
        assert!(alert.region_tag.is_none());
        assert_eq!(alert.raw["desc"], "Take shelter");
    }

    #[test]
    fn test_parse_numeric_id() {
        let alert = Alert::parse(r#"{"id": 133042, "data": []}"#).unwrap();
        assert_eq!(alert.id, "133042");
    }

    #[test]
    fn test_parse_missing_id_rejected() {
        let result = Alert::parse(r#"{"title": "x", "data": ["Tel Aviv"]}"#);
        assert!(matches!(result, Err(FeedError::MissingId)));
    }

    #[test]
    fn test_parse_invalid_json_rejected() {
        let result = Alert::parse("not json at all");
        assert!(matches!(result, Err(FeedError::Malformed(_))));
    }

    #[test]
    fn test_matches_region_wildcard() {
        let alert = Alert::parse(&payload("1", &["Haifa"])).unwrap();
        assert!(alert.matches_region("*"));
    }

    #[test]
    fn test_matches_region_by_tag() {
        let alert =
            Alert::parse(r#"{"id": "1", "region": "North", "data": ["Haifa"]}"#).unwrap();
        assert!(alert.matches_region("North"));
        assert!(!alert.matches_region("South"));
        // Tag present: place-list membership does not apply.
        assert!(!alert.matches_region("Haifa"));
    }

    #[test]
    fn test_matches_region_by_place_when_tag_absent() {
        let alert = Alert::parse(&payload("1", &["Haifa", "Acre"])).unwrap();
        assert!(alert.matches_region("Haifa"));
        assert!(!alert.matches_region("Eilat"));
    }

    #[test]
    fn test_is_test_alert() {
        let markers = vec!["בדיקה".to_string()];
        let drill = Alert::parse(&payload("1", &["בדיקה מחזורית"])).unwrap();
        let real = Alert::parse(&payload("2", &["Tel Aviv"])).unwrap();
        assert!(drill.is_test(&markers));
        assert!(!real.is_test(&markers));
    }
}
