//! Agency configuration tables.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::HexColor;
use crate::text::DEFAULT_STREET_TYPES;

use super::colors::ColorKeyword;
use super::error::ConfigError;

/// The fixed tables behind the Halifax rules.
///
/// `Default` gives the built-in Halifax values. A JSON file may override
/// any subset of fields; missing fields keep their defaults.
///
/// # Examples
///
/// ```
/// use halifax_transit::agency::AgencyConfig;
///
/// let config = AgencyConfig::from_json_str(r#"{ "ignored_words": ["NSCC"] }"#).unwrap();
/// assert_eq!(config.ignored_words, vec!["NSCC".to_string()]);
/// assert_eq!(config.route_ids.get("cp1"), Some(&100_001));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgencyConfig {
    /// Words kept in their stored spelling when title-casing.
    pub ignored_words: Vec<String>,

    /// Street-type abbreviation -> full form.
    pub street_types: BTreeMap<String, String>,

    /// Non-numeric route short name -> stable route id.
    pub route_ids: BTreeMap<String, u64>,

    /// Color the feed still uses for some routes.
    pub legacy_color: HexColor,

    /// Agency color, also the replacement for `legacy_color`.
    pub agency_color: HexColor,

    /// Missing-color rules, first match wins.
    pub color_keywords: Vec<ColorKeyword>,
}

impl AgencyConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Blue from the agency web site.
pub const AGENCY_COLOR_BLUE: HexColor = HexColor::from_static("00558C");

/// Purple some feed routes still carry.
pub const LEGACY_PURPLE: HexColor = HexColor::from_static("7476D9");

/// Yellow and red from the agency route map.
pub const METROX_YELLOW: HexColor = HexColor::from_static("F7C007");
pub const EXPRESS_RED: HexColor = HexColor::from_static("CD1F36");

const ROUTE_IDS: &[(&str, u64)] = &[
    ("cp1", 100_001),
    ("ecrl", 100_002),
    ("ecs", 100_003),
    ("hwst", 100_004),
    ("mack", 100_005),
    ("macd", 100_006),
    ("sp14", 100_014),
    ("sp53", 100_053),
    ("sp58", 100_058),
    ("sp65", 100_065),
    ("fv01", 100_101),
    ("sp6", 100_106),
    ("s14", 100_114),
];

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            ignored_words: vec!["SMU".to_string(), "MSVU".to_string()],
            street_types: DEFAULT_STREET_TYPES
                .iter()
                .map(|(abbr, full)| (abbr.to_string(), full.to_string()))
                .collect(),
            route_ids: ROUTE_IDS
                .iter()
                .map(|(name, id)| (name.to_string(), *id))
                .collect(),
            legacy_color: LEGACY_PURPLE,
            agency_color: AGENCY_COLOR_BLUE,
            color_keywords: vec![
                ColorKeyword::new("metrox", METROX_YELLOW),
                ColorKeyword::new("express", EXPRESS_RED),
            ],
        }
    }
}
