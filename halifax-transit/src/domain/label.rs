//! Label categories for text canonicalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of upstream text being canonicalized.
///
/// Each category has its own ordered cleanup pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelCategory {
    RouteLongName,
    TripHeadsign,
    StopName,
}

impl LabelCategory {
    /// All categories, in declaration order.
    pub const ALL: [LabelCategory; 3] = [
        LabelCategory::RouteLongName,
        LabelCategory::TripHeadsign,
        LabelCategory::StopName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelCategory::RouteLongName => "route-long-name",
            LabelCategory::TripHeadsign => "trip-headsign",
            LabelCategory::StopName => "stop-name",
        }
    }
}

impl fmt::Display for LabelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown label category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for LabelCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A raw upstream string tagged with its category.
///
/// Labels are never mutated; canonicalizing one produces a new string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLabel {
    pub category: LabelCategory,
    pub raw: String,
}

impl TextLabel {
    pub fn new(category: LabelCategory, raw: impl Into<String>) -> Self {
        Self {
            category,
            raw: raw.into(),
        }
    }
}
