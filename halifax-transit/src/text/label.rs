//! Final label cleanup.

use std::sync::LazyLock;

use regex::Regex;

static EMPTY_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]").expect("valid regex"));

static SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/[\s/]*").expect("valid regex"));

static AMPERSANDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*&[\s&]*").expect("valid regex"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Characters that must not start or end a label.
const EDGE: &[char] = &['/', '&', '-', ',', ';', ':'];

/// Tidy what earlier passes left behind.
///
/// Removes empty `()`/`[]`, writes separators as ` / ` and ` & ` with no
/// empty segments between them, collapses whitespace and strips dangling
/// separators from both ends.
///
/// # Examples
///
/// ```
/// use halifax_transit::text::trim_label;
///
/// assert_eq!(trim_label(" / Main Street /  / Oak () "), "Main Street / Oak");
/// ```
pub fn trim_label(text: &str) -> String {
    let mut current = trim_once(text);
    // Every round after the first either shrinks the label or is the last.
    for _ in 0..=current.len() {
        let next = trim_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn trim_once(text: &str) -> String {
    let s = EMPTY_GROUP.replace_all(text, " ");
    let s = SLASHES.replace_all(&s, " / ");
    let s = AMPERSANDS.replace_all(&s, " & ");
    let s = WHITESPACE.replace_all(&s, " ");
    s.trim_matches(|c: char| c.is_whitespace() || EDGE.contains(&c))
        .to_string()
}
