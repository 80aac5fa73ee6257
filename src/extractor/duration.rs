//! Duration text ("1h 2m 3s", "2m5s", "45s ▼") to seconds.
//!
//! Parsing is deliberately lossy: anything that does not read as a duration
//! yields [`UNPARSEABLE_DURATION_SECS`] for the whole input, never an error.

use regex::Regex;
use std::sync::LazyLock;

/// Result for empty or unparseable duration text.
pub const UNPARSEABLE_DURATION_SECS: u32 = 0;

/// Sort markers the listing site appends to the active column.
const MARKER_GLYPHS: [char; 2] = ['▼', '▲'];

/// `<digits><unit>`, where trailing letters after the unit ("min", "sec",
/// "hr") belong to the same segment.
static SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)([hms])[a-z]*").unwrap());

pub fn parse_duration_seconds(text: &str) -> u32 {
    try_parse(text).unwrap_or(UNPARSEABLE_DURATION_SECS)
}

fn try_parse(text: &str) -> Option<u32> {
    let cleaned: String = text
        .chars()
        .filter(|c| !MARKER_GLYPHS.contains(c))
        .collect::<String>()
        .to_lowercase();

    let (mut hours, mut minutes, mut seconds) = (0u32, 0u32, 0u32);
    for token in cleaned.split_whitespace() {
        // Tokens without a unit letter ("0:00", "N/A") carry nothing.
        if !token.contains(['h', 'm', 's']) {
            continue;
        }
        // A unit token must open with its value ("hmm", "x5s").
        if !token.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        for segment in SEGMENT_REGEX.captures_iter(token) {
            let value: u32 = segment[1].parse().ok()?;
            match &segment[2] {
                "h" => hours = value,
                "m" => minutes = value,
                _ => seconds = value,
            }
        }
    }

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}
