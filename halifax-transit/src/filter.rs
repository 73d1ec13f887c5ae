//! Line-at-a-time access to single agency rules.
//!
//! Lets a shell pipeline run one hook over a column of raw feed values.

use std::fmt;
use std::str::FromStr;

use crate::agency::AgencyRules;
use crate::domain::{LabelCategory, TextLabel};
use crate::stops::DataFormatFatal;

/// One agency hook, applied to a single raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Canonicalize a label; named after its category.
    Label(LabelCategory),
    RouteShortName,
    RouteId,
    RouteColor,
    FixColor,
    StopId,
    StopCode,
}

impl Rule {
    pub const ALL: [Rule; 9] = [
        Rule::Label(LabelCategory::RouteLongName),
        Rule::RouteShortName,
        Rule::Label(LabelCategory::TripHeadsign),
        Rule::Label(LabelCategory::StopName),
        Rule::RouteId,
        Rule::RouteColor,
        Rule::FixColor,
        Rule::StopId,
        Rule::StopCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Label(category) => category.as_str(),
            Rule::RouteShortName => "route-short-name",
            Rule::RouteId => "route-id",
            Rule::RouteColor => "route-color",
            Rule::FixColor => "fix-color",
            Rule::StopId => "stop-id",
            Rule::StopCode => "stop-code",
        }
    }

    /// Apply the rule to one raw value.
    ///
    /// Lookups with no agency answer produce an empty line, so output stays
    /// aligned with input.
    pub fn apply(&self, rules: &dyn AgencyRules, raw: &str) -> Result<String, DataFormatFatal> {
        Ok(match self {
            Rule::Label(category) => rules.clean_label(&TextLabel::new(*category, raw)),
            Rule::RouteShortName => rules.clean_route_short_name(raw),
            Rule::RouteId => rules
                .resolve_route_id(raw)
                .map(|id| id.to_string())
                .unwrap_or_default(),
            Rule::RouteColor => rules
                .resolve_missing_color(raw)
                .map(|c| c.to_string())
                .unwrap_or_default(),
            Rule::FixColor => rules.fix_legacy_color(raw),
            Rule::StopId => {
                let cleaned = rules.clean_stop_original_id(raw);
                rules.extract_numeric_stop_id(&cleaned)?.to_string()
            }
            Rule::StopCode => {
                let cleaned = rules.clean_stop_original_id(raw);
                rules.extract_numeric_stop_code(&cleaned)?
            }
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a rule name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule {0:?}")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(category) = s.parse::<LabelCategory>() {
            return Ok(Rule::Label(category));
        }
        Rule::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}
