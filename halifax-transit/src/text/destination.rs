//! Destination extraction for headsigns.

use std::sync::LazyLock;

use regex::Regex;

/// Everything up to and including the last "to" that has a word after it.
static KEEP_TO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^.*\bto\W+(\w)").expect("valid regex"));

/// A "via" word that follows some other word, through to the end.
static REMOVE_VIA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(\w)\W+via\b.*$").expect("valid regex"));

/// Reduce a headsign to its destination.
///
/// `"Bridge Terminal To Downtown Via Robie"` -> `"Downtown"`. A "to" with
/// nothing after it is kept, as is a "via" that opens the label, since
/// dropping those would leave nothing to show.
pub fn keep_to_and_remove_via(text: &str) -> String {
    let kept = KEEP_TO.replace(text, "${1}");
    REMOVE_VIA.replace(&kept, "${1}").into_owned()
}
