//! Property tests for the label pipelines.

use proptest::prelude::*;
use regex::Regex;

use super::*;
use crate::domain::LabelCategory;

/// Labels assembled from words that real Halifax feeds contain, so that
/// the interesting rules actually fire.
fn feed_label(words: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(words), 0..10).prop_map(|w| w.join(" "))
}

const HEADSIGN_WORDS: &[&str] = &[
    "91", "52A", "1", "Express", "EXPRESS", "to", "To", "via", "VIA", "Downtown", "Bridge",
    "Terminal", "only", "ONLY", "MetroLink", "saint", "St", "st.", "and", "&", "Rd", "SMU",
    "msvu", "/", "-", "Robie", "Street", "Margarets", "Bay", "(Ferry)",
];

const STOP_WORDS: &[&str] = &[
    "Main", "ST", "Ave", "opposite", "after", "before", "and", "at", "@", "&", "[old", "sign]",
    "[NB]", "<a>", "x<b>", "(123)", "first", "2ND", "SMU", "/", "in front of", "Robie",
    "Quinpool", "Rd", "Terminal", "-", "()",
];

const ROUTE_WORDS: &[&str] = &["*", "* ", "Spryfield", "MetroX", "Express", "Tantallon", "1"];

fn label_in(category: LabelCategory) -> BoxedStrategy<String> {
    match category {
        LabelCategory::RouteLongName => feed_label(ROUTE_WORDS).boxed(),
        LabelCategory::TripHeadsign => feed_label(HEADSIGN_WORDS).boxed(),
        LabelCategory::StopName => feed_label(STOP_WORDS).boxed(),
    }
}

fn any_category() -> impl Strategy<Value = LabelCategory> {
    proptest::sample::select(LabelCategory::ALL.to_vec())
}

proptest! {
    /// Canonicalizing a canonical label changes nothing
    #[test]
    fn idempotent(
        (category, raw) in any_category().prop_flat_map(|c| (Just(c), label_in(c)))
    ) {
        let canon = Canonicalizer::default();
        let once = canon.canonicalize(category, &raw);
        let twice = canon.canonicalize(category, &once);
        prop_assert_eq!(once, twice);
    }

    /// Idempotence does not depend on feed vocabulary
    #[test]
    fn idempotent_on_punctuated_text(
        category in any_category(),
        raw in "[a-zA-Z0-9 ()\\[\\]<>/&@.,*-]{0,40}",
    ) {
        let canon = Canonicalizer::default();
        let once = canon.canonicalize(category, &raw);
        let twice = canon.canonicalize(category, &once);
        prop_assert_eq!(once, twice);
    }

    /// However many stop numbers trail a name, one pipeline run drops them all
    #[test]
    fn trailing_stop_numbers_removed(
        numbers in proptest::collection::vec(0u32..10_000, 1..30),
        sep in prop_oneof![Just(" "), Just(" / "), Just("")],
    ) {
        let suffix: Vec<String> = numbers.iter().map(|n| format!("({n})")).collect();
        let raw = format!("Robie {}", suffix.join(sep));
        let canon = Canonicalizer::default();
        prop_assert_eq!(canon.apply_once(LabelCategory::StopName, &raw), "Robie");
        prop_assert_eq!(canon.canonicalize(LabelCategory::StopName, &raw), "Robie");
    }

    /// Arbitrary text never panics, in any category
    #[test]
    fn total_on_arbitrary_text(category in any_category(), raw in "\\PC{0,40}") {
        let canon = Canonicalizer::default();
        let _ = canon.canonicalize(category, &raw);
    }

    /// Stop names never keep a bracketed segment
    #[test]
    fn stop_names_have_no_bracket_pairs(raw in "[a-z \\[\\]<>()0-9]{0,40}") {
        let bracket_pair = Regex::new(r"\[[^\]]*\]").unwrap();
        let out = Canonicalizer::default().canonicalize(LabelCategory::StopName, &raw);
        prop_assert!(!bracket_pair.is_match(&out), "output {:?}", out);
    }

    /// Canonical labels never carry outer whitespace or dangling separators
    #[test]
    fn trimmed_edges(raw in label_in(LabelCategory::StopName)) {
        let out = Canonicalizer::default().canonicalize(LabelCategory::StopName, &raw);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.starts_with('/') && !out.ends_with('/'));
    }
}
