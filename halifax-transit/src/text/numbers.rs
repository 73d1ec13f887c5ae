//! Ordinal number cleanup.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ORDINAL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|eleventh|twelfth)\b",
    )
    .expect("valid regex")
});

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([0-9]+)(st|nd|rd|th)\b").expect("valid regex"));

fn ordinal(word: &str) -> &'static str {
    match word.to_ascii_lowercase().as_str() {
        "first" => "1st",
        "second" => "2nd",
        "third" => "3rd",
        "fourth" => "4th",
        "fifth" => "5th",
        "sixth" => "6th",
        "seventh" => "7th",
        "eighth" => "8th",
        "ninth" => "9th",
        "tenth" => "10th",
        "eleventh" => "11th",
        _ => "12th",
    }
}

/// Write ordinals as digits with a lowercase suffix.
///
/// `"First Lake Dr"` -> `"1st Lake Dr"`, `"2ND Ave"` -> `"2nd Ave"`.
pub fn normalize_numbers(text: &str) -> String {
    let spelled = ORDINAL_WORD.replace_all(text, |caps: &Captures| ordinal(&caps[1]));
    ORDINAL_SUFFIX
        .replace_all(&spelled, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_ascii_lowercase())
        })
        .into_owned()
}
