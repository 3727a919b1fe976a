//! Place-name normalization helpers.

/// Normalize a place name for comparison.
///
/// Strips parenthesis and quote punctuation and surrounding whitespace.
/// Applied to reference data at load time and to classifier input, so both
/// sides compare in the same form.
pub fn normalize_place(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '\'' | '"'))
        .collect();

    cleaned.trim().to_string()
}
