//! Connector words: "and", "at", "Saint".

use std::sync::LazyLock;

use regex::Regex;

static AND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:&|\band\b)\s*").expect("valid regex"));

static AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:@|\bat\b)\s*").expect("valid regex"));

static SAINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsaint\b\.?").expect("valid regex"));

/// "St" opening a label or a `/`/`&` segment, followed by another word.
static LEADING_ST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|[/&])([\s/&,;:-]*)st(\s+\w)").expect("valid regex"));

pub const AMPERSAND: &str = " & ";
pub const SLASH: &str = " / ";
pub const SAINT_SHORT: &str = "St.";

/// `"Quinpool and Robie"`, `"Quinpool&Robie"` -> `"Quinpool & Robie"`.
pub fn normalize_ampersand(text: &str) -> String {
    AND.replace_all(text, AMPERSAND).into_owned()
}

/// `"Robie at Cunard"`, `"Robie@Cunard"` -> `"Robie / Cunard"`.
pub fn normalize_at(text: &str) -> String {
    AT.replace_all(text, SLASH).into_owned()
}

/// `"Saint Margarets"`, `"St Margarets"` -> `"St. Margarets"`.
pub fn normalize_saint(text: &str) -> String {
    mark_leading_saint(&SAINT.replace_all(text, SAINT_SHORT))
}

/// A bare `St` that opens a label or segment names a saint, not a street:
/// `"St Pauls Ave / Oak St"` -> `"St. Pauls Ave / Oak St"`.
///
/// Street-type expansion leaves `St.` alone, so run this first.
pub fn mark_leading_saint(text: &str) -> String {
    LEADING_ST
        .replace_all(text, format!("${{1}}${{2}}{SAINT_SHORT}${{3}}"))
        .into_owned()
}
