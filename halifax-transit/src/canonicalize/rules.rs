//! Agency-specific rewrite patterns.
//!
//! Compiled once per process and only ever read.

use std::sync::LazyLock;

use regex::Regex;

/// Route long names from the feed may start with a "* " marker.
pub(super) static ROUTE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\* )+").expect("valid regex"));

/// Leading run numbers on a headsign: digits, optional letter, then a space.
/// Separators between runs go with them.
pub(super) static RUN_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[\s/&,;:-]*[0-9]+\w?\s+)+").expect("valid regex"));

/// Every trailing "only", with the separators between them.
pub(super) static ENDS_WITH_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[\s/&,;:-]*\bonly\b)+[\s/&,;:-]*$").expect("valid regex")
});

pub(super) static METROLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmetrolink\b").expect("valid regex"));

pub(super) static EXPRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bexpress\b").expect("valid regex"));

/// Square-bracketed notes, e.g. "[Westbound]".
pub(super) static BOUNDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("valid regex"));

/// Innermost chevron pair; its content is kept.
pub(super) static CHEVRONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>]*)>").expect("valid regex"));

/// Phrases placing a stop relative to a cross street. Longest first.
pub(super) static STREETS_CROSSING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\s*\b(?:",
        r"after\s+and\s+opposite|afteropposite|after|",
        r"before\s+and\s+opposite|beforeopposite|before|",
        r"in\s+front\s+of|",
        r"opposite\s+and\s+after|opposite\s+and\s+before|",
        r"oppositeafter|oppositebefore|opposite",
        r")\b\s*",
    ))
    .expect("valid regex")
});

/// Trailing stop numbers in parentheses, e.g. " (8342)" or " (12) / (8342)".
pub(super) static ENDS_WITH_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[\s/&,;:-]*\([0-9]+\))+[\s/&,;:-]*$").expect("valid regex")
});
