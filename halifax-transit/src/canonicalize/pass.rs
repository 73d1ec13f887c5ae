//! Individual rewrite passes.

use crate::text::{
    IgnoredWords, StreetTypeTable, keep_to_and_remove_via, mark_leading_saint,
    normalize_ampersand, normalize_at, normalize_numbers, normalize_saint, title_case_words,
    trim_label,
};

use super::rules::{
    BOUNDS, CHEVRONS, ENDS_WITH_NUMBER, ENDS_WITH_ONLY, EXPRESS, METROLINK, ROUTE_MARKER,
    RUN_NUMBER, STREETS_CROSSING,
};

/// Tables a pass may consult.
#[derive(Debug, Clone, Copy)]
pub struct PassContext<'a> {
    pub ignored_words: &'a IgnoredWords,
    pub street_types: &'a StreetTypeTable,
}

/// One step of a label pipeline.
///
/// Every pass is total: a pattern that does not match leaves the text as
/// it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    TitleCase,
    StripRouteMarker,
    KeepToRemoveVia,
    StripRunNumber,
    StripTrailingOnly,
    RemoveMetrolink,
    RemoveExpress,
    Saint,
    RemoveBounds,
    DropChevrons,
    StreetsCrossing,
    StripTrailingNumber,
    Ampersand,
    At,
    StreetTypes,
    Numbers,
    TrimLabel,
}

impl Pass {
    pub fn name(&self) -> &'static str {
        match self {
            Pass::TitleCase => "title-case",
            Pass::StripRouteMarker => "strip-route-marker",
            Pass::KeepToRemoveVia => "keep-to-remove-via",
            Pass::StripRunNumber => "strip-run-number",
            Pass::StripTrailingOnly => "strip-trailing-only",
            Pass::RemoveMetrolink => "remove-metrolink",
            Pass::RemoveExpress => "remove-express",
            Pass::Saint => "saint",
            Pass::RemoveBounds => "remove-bounds",
            Pass::DropChevrons => "drop-chevrons",
            Pass::StreetsCrossing => "streets-crossing",
            Pass::StripTrailingNumber => "strip-trailing-number",
            Pass::Ampersand => "ampersand",
            Pass::At => "at",
            Pass::StreetTypes => "street-types",
            Pass::Numbers => "numbers",
            Pass::TrimLabel => "trim-label",
        }
    }

    pub fn apply(&self, text: &str, ctx: PassContext<'_>) -> String {
        match self {
            Pass::TitleCase => title_case_words(text, ctx.ignored_words),
            Pass::StripRouteMarker => ROUTE_MARKER.replace(text, "").into_owned(),
            Pass::KeepToRemoveVia => keep_to_and_remove_via(text),
            Pass::StripRunNumber => RUN_NUMBER.replace(text, "").into_owned(),
            Pass::StripTrailingOnly => ENDS_WITH_ONLY.replace(text, "").into_owned(),
            // Removed words leave a space so neighbours never fuse.
            Pass::RemoveMetrolink => METROLINK.replace_all(text, " ").into_owned(),
            Pass::RemoveExpress => EXPRESS.replace_all(text, " ").into_owned(),
            Pass::Saint => normalize_saint(text),
            Pass::RemoveBounds => BOUNDS.replace_all(text, "").into_owned(),
            Pass::DropChevrons => drop_chevrons(text),
            Pass::StreetsCrossing => STREETS_CROSSING.replace_all(text, " / ").into_owned(),
            Pass::StripTrailingNumber => ENDS_WITH_NUMBER.replace(text, "").into_owned(),
            Pass::Ampersand => normalize_ampersand(text),
            Pass::At => normalize_at(text),
            // A segment-leading "St" is a saint and must not become "Street".
            Pass::StreetTypes => ctx.street_types.normalize(&mark_leading_saint(text)),
            Pass::Numbers => normalize_numbers(text),
            Pass::TrimLabel => trim_label(text),
        }
    }
}

/// `"Robie<Cunard>"` -> `"RobieCunard"`, innermost pairs first until none remain.
fn drop_chevrons(text: &str) -> String {
    let mut current = text.to_string();
    while CHEVRONS.is_match(&current) {
        current = CHEVRONS.replace_all(&current, "${1}").into_owned();
    }
    current
}
