//! Numeric stop ids and codes from raw feed identifiers.
//!
//! Halifax stop ids are the "GoTime" numbers riders text for arrival
//! times, so the numeric part doubles as the public stop code.

use std::sync::LazyLock;

use regex::Regex;
use tracing::error;

use super::error::DataFormatFatal;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Suffix appended to ids of stops merged from several feeds.
static MERGED_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_merged_[A-Za-z0-9]+$").expect("valid regex"));

fn is_digits_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// The digits to use for a raw stop identifier.
///
/// Digits-only identifiers are used as they are; otherwise the first run
/// of digits is taken.
fn numeric_part(raw: &str) -> Result<&str, DataFormatFatal> {
    if is_digits_only(raw) {
        return Ok(raw);
    }
    match DIGITS.find(raw) {
        Some(m) => Ok(m.as_str()),
        None => {
            error!(stop_id = raw, "stop identifier has no digits");
            Err(DataFormatFatal::new(raw, "no digits to use as a stop number"))
        }
    }
}

/// Stop code shown to riders, keeping any leading zeros.
///
/// # Examples
///
/// ```
/// use halifax_transit::stops::extract_numeric_stop_code;
///
/// assert_eq!(extract_numeric_stop_code("ST-04521").unwrap(), "04521");
/// assert_eq!(extract_numeric_stop_code("992").unwrap(), "992");
/// assert!(extract_numeric_stop_code("no-digits-here").is_err());
/// ```
pub fn extract_numeric_stop_code(raw: &str) -> Result<String, DataFormatFatal> {
    numeric_part(raw).map(str::to_string)
}

/// Integer stop id.
pub fn extract_numeric_stop_id(raw: &str) -> Result<u32, DataFormatFatal> {
    let digits = numeric_part(raw)?;
    digits.parse::<u32>().map_err(|_| {
        error!(stop_id = raw, digits, "stop number does not fit in a stop id");
        DataFormatFatal::new(raw, "stop number out of range")
    })
}

/// Drop the `_merged_<id>` suffix the feed merge step leaves on stop ids.
pub fn clean_stop_original_id(raw: &str) -> String {
    MERGED_ID.replace(raw, "").into_owned()
}
