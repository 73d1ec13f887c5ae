//! Halifax Transit (Nova Scotia) bus rules.
//!
//! Feed: <http://gtfs.halifax.ca/static/google_transit.zip>

use tracing::debug;

use crate::canonicalize::Canonicalizer;
use crate::domain::{HexColor, LabelCategory, TextLabel};
use crate::stops::{self, DataFormatFatal};
use crate::text::{IgnoredWords, StreetTypeTable};

use super::colors::ColorRules;
use super::config::AgencyConfig;
use super::error::ConfigError;
use super::routes::{self, RouteIdTable};
use super::rules::{AgencyInfo, AgencyRules, RouteType};

/// Halifax Transit rules built from an [`AgencyConfig`].
///
/// Immutable once built, so one instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use halifax_transit::agency::{AgencyRules, HalifaxTransit};
///
/// let halifax = HalifaxTransit::default();
/// assert_eq!(halifax.resolve_route_id("cp1"), Some(100_001));
/// assert_eq!(halifax.fix_legacy_color("7476D9"), "00558C");
/// assert_eq!(halifax.clean_stop_name("Main St opposite 123 [old sign]"), "Main Street / 123");
/// ```
#[derive(Debug, Clone)]
pub struct HalifaxTransit {
    info: AgencyInfo,
    routes: RouteIdTable,
    colors: ColorRules,
    canonicalizer: Canonicalizer,
}

impl HalifaxTransit {
    /// Validate `config` and build the rules.
    pub fn new(config: AgencyConfig) -> Result<Self, ConfigError> {
        let routes = RouteIdTable::new(config.route_ids)?;
        let colors = ColorRules::new(
            config.legacy_color,
            config.agency_color,
            config.color_keywords,
        )?;
        let street_types = StreetTypeTable::new(config.street_types)?;
        let ignored_words = IgnoredWords::new(config.ignored_words);

        debug!(
            routes = routes.len(),
            street_types = street_types.len(),
            ignored_words = ignored_words.len(),
            "built Halifax Transit rules"
        );

        Ok(Self {
            info: AgencyInfo {
                name: "Halifax Transit",
                route_type: RouteType::Bus,
                languages: &["en"],
                color: config.agency_color,
            },
            routes,
            colors,
            canonicalizer: Canonicalizer::new(ignored_words, street_types),
        })
    }

    pub fn routes(&self) -> &RouteIdTable {
        &self.routes
    }
}

impl Default for HalifaxTransit {
    fn default() -> Self {
        Self::new(AgencyConfig::default()).expect("built-in Halifax config is valid")
    }
}

impl AgencyRules for HalifaxTransit {
    fn agency_info(&self) -> &AgencyInfo {
        &self.info
    }

    fn resolve_route_id(&self, route_short_name: &str) -> Option<u64> {
        self.routes.resolve(route_short_name)
    }

    fn clean_route_long_name(&self, route_long_name: &str) -> String {
        self.canonicalizer
            .canonicalize(LabelCategory::RouteLongName, route_long_name)
    }

    fn clean_route_short_name(&self, route_short_name: &str) -> String {
        routes::clean_route_short_name(route_short_name)
    }

    fn fix_legacy_color(&self, color: &str) -> String {
        self.colors.fix_legacy(color)
    }

    fn resolve_missing_color(&self, route_long_name: &str) -> Option<HexColor> {
        self.colors.missing_color(route_long_name)
    }

    fn clean_trip_headsign(&self, trip_headsign: &str) -> String {
        self.canonicalizer
            .canonicalize(LabelCategory::TripHeadsign, trip_headsign)
    }

    fn clean_stop_name(&self, stop_name: &str) -> String {
        self.canonicalizer
            .canonicalize(LabelCategory::StopName, stop_name)
    }

    fn clean_label(&self, label: &TextLabel) -> String {
        self.canonicalizer.canonicalize_label(label)
    }

    fn clean_stop_original_id(&self, stop_id: &str) -> String {
        stops::clean_stop_original_id(stop_id)
    }

    fn extract_numeric_stop_id(&self, stop_id: &str) -> Result<u32, DataFormatFatal> {
        stops::extract_numeric_stop_id(stop_id)
    }

    fn extract_numeric_stop_code(&self, stop_id: &str) -> Result<String, DataFormatFatal> {
        stops::extract_numeric_stop_code(stop_id)
    }
}
