//! Per-category pipelines and the canonicalizer that runs them.

use tracing::{trace, warn};

use crate::domain::{LabelCategory, TextLabel};
use crate::text::{IgnoredWords, StreetTypeTable};

use super::pass::{Pass, PassContext};

const ROUTE_LONG_NAME: &[Pass] = &[Pass::StripRouteMarker];

const TRIP_HEADSIGN: &[Pass] = &[
    Pass::TitleCase,
    Pass::KeepToRemoveVia,
    Pass::StripRunNumber,
    Pass::StripTrailingOnly,
    Pass::RemoveMetrolink,
    Pass::RemoveExpress,
    Pass::Saint,
    Pass::Ampersand,
    Pass::StreetTypes,
    Pass::TrimLabel,
];

const STOP_NAME: &[Pass] = &[
    Pass::TitleCase,
    Pass::RemoveBounds,
    Pass::DropChevrons,
    Pass::StreetsCrossing,
    Pass::StripTrailingNumber,
    Pass::Ampersand,
    Pass::At,
    Pass::StreetTypes,
    Pass::Numbers,
    Pass::TrimLabel,
];

/// Minimum number of pipeline rounds allowed before giving up on a fixed
/// point. Longer labels get one extra round per byte.
const MIN_ROUNDS: usize = 8;

/// The ordered passes for a category.
pub fn passes(category: LabelCategory) -> &'static [Pass] {
    match category {
        LabelCategory::RouteLongName => ROUTE_LONG_NAME,
        LabelCategory::TripHeadsign => TRIP_HEADSIGN,
        LabelCategory::StopName => STOP_NAME,
    }
}

/// Turns raw feed labels into display labels.
///
/// The canonical form of a label is the fixed point of its category
/// pipeline: passes are applied in order, and the whole pipeline is
/// re-applied while it still changes the text. Canonicalizing a canonical
/// label therefore returns it unchanged.
///
/// # Examples
///
/// ```
/// use halifax_transit::canonicalize::Canonicalizer;
/// use halifax_transit::domain::LabelCategory;
///
/// let canon = Canonicalizer::default();
/// assert_eq!(
///     canon.canonicalize(LabelCategory::TripHeadsign, "91 Express to Downtown via Robie Street"),
///     "Downtown"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    ignored_words: IgnoredWords,
    street_types: StreetTypeTable,
}

impl Canonicalizer {
    pub fn new(ignored_words: IgnoredWords, street_types: StreetTypeTable) -> Self {
        Self {
            ignored_words,
            street_types,
        }
    }

    /// Canonicalize `raw` as a label of the given category.
    pub fn canonicalize(&self, category: LabelCategory, raw: &str) -> String {
        let max_rounds = MIN_ROUNDS.max(raw.len());
        let mut current = self.apply_once(category, raw);
        for round in 1..max_rounds {
            let next = self.apply_once(category, &current);
            if next == current {
                return current;
            }
            trace!(%category, round, "label still changing, re-running pipeline");
            current = next;
        }
        warn!(
            %category,
            raw,
            last = %current,
            "label did not reach a fixed point"
        );
        current
    }

    pub fn canonicalize_label(&self, label: &TextLabel) -> String {
        self.canonicalize(label.category, &label.raw)
    }

    /// Run each pass of the category pipeline exactly once.
    pub fn apply_once(&self, category: LabelCategory, raw: &str) -> String {
        let ctx = PassContext {
            ignored_words: &self.ignored_words,
            street_types: &self.street_types,
        };
        passes(category)
            .iter()
            .fold(raw.to_string(), |text, pass| {
                let out = pass.apply(&text, ctx);
                if out != text {
                    trace!(pass = pass.name(), before = %text, after = %out, "pass rewrote label");
                }
                out
            })
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(IgnoredWords::new(["SMU", "MSVU"]), StreetTypeTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon() -> Canonicalizer {
        Canonicalizer::default()
    }

    fn headsign(s: &str) -> String {
        canon().canonicalize(LabelCategory::TripHeadsign, s)
    }

    fn stop(s: &str) -> String {
        canon().canonicalize(LabelCategory::StopName, s)
    }

    fn route(s: &str) -> String {
        canon().canonicalize(LabelCategory::RouteLongName, s)
    }

    #[test]
    fn pipeline_order_is_fixed() {
        assert_eq!(passes(LabelCategory::RouteLongName), &[Pass::StripRouteMarker]);
        assert_eq!(passes(LabelCategory::TripHeadsign).first(), Some(&Pass::TitleCase));
        assert_eq!(passes(LabelCategory::TripHeadsign).last(), Some(&Pass::TrimLabel));
        assert_eq!(passes(LabelCategory::StopName).len(), 10);
        assert_eq!(passes(LabelCategory::StopName).last(), Some(&Pass::TrimLabel));
    }

    #[test]
    fn route_long_name_strips_marker_only() {
        assert_eq!(route("* Spryfield"), "Spryfield");
        assert_eq!(route("* * Spryfield"), "Spryfield");
        assert_eq!(route("FAIRVIEW main st"), "FAIRVIEW main st");
        assert_eq!(route(""), "");
    }

    #[test]
    fn headsign_express_via() {
        let out = headsign("91 Express to Downtown via Robie Street");
        assert!(out.contains("Downtown"));
        assert!(!out.contains("Express"));
        assert!(!out.to_lowercase().contains("via"));
        assert!(!out.starts_with(|c: char| c.is_ascii_digit()));
        assert_eq!(out, "Downtown");
    }

    #[test]
    fn headsign_run_number_and_only() {
        assert_eq!(headsign("1 SPRING GARDEN ONLY"), "Spring Garden");
        assert_eq!(headsign("52A BRIDGE TERMINAL"), "Bridge Terminal");
        assert_eq!(headsign("159 COLBY"), "Colby");
    }

    #[test]
    fn headsign_removes_service_words() {
        assert_eq!(headsign("320 MetroLink Airport"), "Airport");
        assert_eq!(headsign("Express Portland Hills"), "Portland Hills");
        assert_eq!(headsign("Portland Hills Express Terminal"), "Portland Hills Terminal");
    }

    #[test]
    fn headsign_saint_and_streets() {
        assert_eq!(headsign("saint margarets bay rd"), "St. Margarets Bay Road");
        assert_eq!(headsign("Mumford and Dunbrack"), "Mumford & Dunbrack");
        assert_eq!(headsign("smu via barrington st"), "SMU");
        assert_eq!(headsign("To msvu"), "MSVU");
    }

    #[test]
    fn stop_name_example() {
        let out = stop("Main St opposite 123 [old sign]");
        assert!(!out.contains('['));
        assert!(!out.contains(']'));
        assert!(!out.to_lowercase().contains("opposite"));
        assert!(out.contains("Street"));
        assert_eq!(out, "Main Street / 123");
    }

    #[test]
    fn stop_name_crossing_and_at() {
        assert_eq!(stop("BARRINGTON ST AFTER DUKE ST"), "Barrington Street / Duke Street");
        assert_eq!(stop("Robie St in front of SMU"), "Robie Street / SMU");
        assert_eq!(stop("Quinpool Rd at Oxford St"), "Quinpool Road / Oxford Street");
        assert_eq!(stop("Quinpool Rd @ Oxford St"), "Quinpool Road / Oxford Street");
    }

    #[test]
    fn stop_name_bounds_chevrons_numbers() {
        assert_eq!(stop("Robie St [Northbound] (8342)"), "Robie Street");
        assert_eq!(stop("Scotia Square<Barrington>"), "Scotia Squarebarrington");
        assert_eq!(stop("first lake dr and second ave"), "1st Lake Drive & 2nd Avenue");
        assert_eq!(stop("Opposite Mic Mac Mall"), "Mic Mac Mall");
    }

    #[test]
    fn repeated_stop_numbers_removed_at_once() {
        let raw = "Robie (1) (2) (3) (4) (5) (6) (7) (8) (9) (10)";
        assert_eq!(stop(raw), "Robie");
        assert_eq!(canon().apply_once(LabelCategory::StopName, raw), "Robie");
        assert_eq!(stop(&stop(raw)), stop(raw));
    }

    #[test]
    fn leading_st_is_saint() {
        assert_eq!(headsign("St Margarets Bay"), "St. Margarets Bay");
        assert_eq!(headsign("ST MARGARETS BAY RD"), "St. Margarets Bay Road");
        assert_eq!(stop("St Pauls Ave"), "St. Pauls Avenue");
        assert_eq!(
            stop("Main St opposite St Pauls Ave"),
            "Main Street / St. Pauls Avenue"
        );
        assert_eq!(stop("Barrington St"), "Barrington Street");
    }

    #[test]
    fn empty_and_blank_inputs() {
        for c in LabelCategory::ALL {
            assert_eq!(canon().canonicalize(c, ""), "");
        }
        assert_eq!(stop("   "), "");
        assert_eq!(headsign(" / "), "");
        assert_eq!(stop("[only a note]"), "");
    }

    #[test]
    fn canonicalize_label_uses_category() {
        let label = TextLabel::new(LabelCategory::StopName, "Main St at Oak Ave");
        assert_eq!(canon().canonicalize_label(&label), "Main Street / Oak Avenue");
    }

    #[test]
    fn canonical_labels_are_fixed_points() {
        let c = canon();
        for (category, raw) in [
            (LabelCategory::TripHeadsign, "91 92 Downtown"),
            (LabelCategory::TripHeadsign, "Express 91 Park"),
            (LabelCategory::TripHeadsign, "Park/Via Robie"),
            (LabelCategory::StopName, "A [x] <b> after and opposite (12)"),
            (LabelCategory::RouteLongName, "* * *"),
            (
                LabelCategory::StopName,
                "Robie (1) / (2) / (3) / (4) / (5) / (6) / (7) / (8) / (9)",
            ),
            (
                LabelCategory::TripHeadsign,
                "X Only Express Only Express Only Express Only Express",
            ),
        ] {
            let once = c.canonicalize(category, raw);
            assert_eq!(c.canonicalize(category, &once), once, "input {raw:?}");
            assert_eq!(c.apply_once(category, &once), once, "input {raw:?}");
        }
    }
}
