//! Word casing with protected words.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").expect("valid regex"));

/// Words that keep a fixed spelling when a label is title-cased.
///
/// Lookup is case-insensitive; the stored spelling is what gets emitted,
/// so `"smu"` in a feed comes out as `"SMU"`.
#[derive(Debug, Clone, Default)]
pub struct IgnoredWords {
    /// Lowercased word -> canonical spelling.
    words: HashMap<String, String>,
}

impl IgnoredWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::<String>::into)
            .filter(|w| !w.is_empty())
            .map(|w| (w.to_lowercase(), w))
            .collect();
        Self { words }
    }

    /// Returns the canonical spelling if `word` is protected.
    pub fn canonical(&self, word: &str) -> Option<&str> {
        self.words.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lowercase every whitespace-delimited word, then capitalize it.
///
/// The first alphanumeric character of a word is uppercased when it is a
/// letter, so `"(halifax)"` becomes `"(Halifax)"` and `"1st"` stays `"1st"`.
/// Protected words are emitted in their stored spelling. Whitespace between
/// words is left as it was.
///
/// # Examples
///
/// ```
/// use halifax_transit::text::{IgnoredWords, title_case_words};
///
/// let ignored = IgnoredWords::new(["SMU"]);
/// assert_eq!(title_case_words("smu ROBIE street", &ignored), "SMU Robie Street");
/// ```
pub fn title_case_words(text: &str, ignored: &IgnoredWords) -> String {
    TOKEN
        .replace_all(text, |caps: &Captures| title_case_token(&caps[0], ignored))
        .into_owned()
}

fn title_case_token(token: &str, ignored: &IgnoredWords) -> String {
    let Some((start, end)) = alphanumeric_span(token) else {
        return token.to_lowercase();
    };
    let (prefix, core, suffix) = (&token[..start], &token[start..end], &token[end..]);

    if let Some(canonical) = ignored.canonical(core) {
        return format!("{prefix}{canonical}{suffix}");
    }

    let lower = core.to_lowercase();
    let mut chars = lower.chars();
    let capitalized = match chars.next() {
        Some(first) if first.is_alphabetic() => {
            let mut upper = first.to_uppercase();
            // Letters whose uppercase form is several characters stay as they are.
            match (upper.next(), upper.next()) {
                (Some(single), None) => format!("{single}{}", chars.as_str()),
                _ => lower.clone(),
            }
        }
        _ => lower.clone(),
    };

    format!("{prefix}{capitalized}{}", suffix.to_lowercase())
}

/// Byte range from the first to the last alphanumeric character.
fn alphanumeric_span(token: &str) -> Option<(usize, usize)> {
    let start = token.find(char::is_alphanumeric)?;
    let (last, ch) = token
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())?;
    Some((start, last + ch.len_utf8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halifax() -> IgnoredWords {
        IgnoredWords::new(["SMU", "MSVU"])
    }

    #[test]
    fn capitalizes_each_word() {
        let none = IgnoredWords::default();
        assert_eq!(title_case_words("SPRING GARDEN RD", &none), "Spring Garden Rd");
        assert_eq!(title_case_words("bridge terminal", &none), "Bridge Terminal");
        assert_eq!(title_case_words("mIxEd CaSe", &none), "Mixed Case");
    }

    #[test]
    fn preserves_protected_words() {
        assert_eq!(title_case_words("smu via robie", &halifax()), "SMU Via Robie");
        assert_eq!(title_case_words("Msvu", &halifax()), "MSVU");
        assert_eq!(title_case_words("(smu)", &halifax()), "(SMU)");
    }

    #[test]
    fn skips_leading_punctuation_and_digits() {
        let none = IgnoredWords::default();
        assert_eq!(title_case_words("[OLD SIGN]", &none), "[Old Sign]");
        assert_eq!(title_case_words("1ST AVE", &none), "1st Ave");
        assert_eq!(title_case_words("91A", &none), "91a");
        assert_eq!(title_case_words("o'BRIEN", &none), "O'brien");
    }

    #[test]
    fn keeps_whitespace_and_symbols() {
        let none = IgnoredWords::default();
        assert_eq!(title_case_words("  a  /  b ", &none), "  A  /  B ");
        assert_eq!(title_case_words("&", &none), "&");
        assert_eq!(title_case_words("", &none), "");
    }

    #[test]
    fn ignored_words_lookup() {
        let words = halifax();
        assert_eq!(words.len(), 2);
        assert_eq!(words.canonical("smu"), Some("SMU"));
        assert_eq!(words.canonical("MsVu"), Some("MSVU"));
        assert_eq!(words.canonical("dal"), None);
        assert!(IgnoredWords::new(Vec::<String>::new()).is_empty());
    }
}
