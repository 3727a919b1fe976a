//! Alert message composition.
//!
//! Renders a classified result into the WhatsApp-style text block sent to
//! recipients. Output is deterministic: regions and places are emitted in
//! lexicographic order regardless of classification iteration order.

use region_data::ClassifiedResult;

/// Introductory phrase placed between the title and the region block.
pub const INTRO_PHRASE: &str = "In the following areas:";

/// Line separator used by the gateway message format.
const LINE_SEP: &str = "\r\n";

/// Separator between places within a region line.
const PLACE_SEP: &str = ", ";

/// Render the region block: one `*Region*: place, place` line per region,
/// regions and places sorted lexicographically.
pub fn format_regions(result: &ClassifiedResult) -> String {
    let mut regions: Vec<&String> = result.keys().collect();
    regions.sort();

    let lines: Vec<String> = regions
        .into_iter()
        .map(|region| {
            let mut places = result[region].clone();
            places.sort();
            format!("*{}*: {}", region, places.join(PLACE_SEP))
        })
        .collect();

    lines.join(LINE_SEP)
}

/// Render the full alert message: bolded title, intro phrase, region block.
pub fn format_alert(title: &str, result: &ClassifiedResult) -> String {
    format!(
        "*{}*{}{}{}{}",
        title,
        LINE_SEP,
        INTRO_PHRASE,
        LINE_SEP,
        format_regions(result)
    )
}
