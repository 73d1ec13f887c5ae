//! The capability set a host import pipeline needs from an agency.

use crate::domain::{HexColor, TextLabel};
use crate::stops::DataFormatFatal;

/// GTFS `route_type` values an agency can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteType {
    LightRail,
    Subway,
    Rail,
    Bus,
    Ferry,
}

impl RouteType {
    /// The GTFS numeric code.
    pub fn gtfs_code(&self) -> u8 {
        match self {
            RouteType::LightRail => 0,
            RouteType::Subway => 1,
            RouteType::Rail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
        }
    }
}

/// Static facts about the agency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencyInfo {
    pub name: &'static str,
    pub route_type: RouteType,
    /// BCP 47 language tags the labels are written in.
    pub languages: &'static [&'static str],
    pub color: HexColor,
}

/// Agency-specific hooks called by the import pipeline.
///
/// Lookups that return `None` mean "no agency rule applies"; the host then
/// uses its generic behavior. Stop identifier extraction is the only hook
/// that can fail, and its failure ends the import.
pub trait AgencyRules {
    fn agency_info(&self) -> &AgencyInfo;

    /// Stable id for a route short name the host cannot derive one for.
    fn resolve_route_id(&self, route_short_name: &str) -> Option<u64>;

    fn clean_route_long_name(&self, route_long_name: &str) -> String;

    fn clean_route_short_name(&self, route_short_name: &str) -> String;

    /// Replace colors the agency no longer uses.
    fn fix_legacy_color(&self, color: &str) -> String;

    /// Color for a route that has none in the feed.
    fn resolve_missing_color(&self, route_long_name: &str) -> Option<HexColor>;

    fn clean_trip_headsign(&self, trip_headsign: &str) -> String;

    fn clean_stop_name(&self, stop_name: &str) -> String;

    /// Clean a label with whichever of the hooks above fits its category.
    fn clean_label(&self, label: &TextLabel) -> String;

    fn clean_stop_original_id(&self, stop_id: &str) -> String;

    fn extract_numeric_stop_id(&self, stop_id: &str) -> Result<u32, DataFormatFatal>;

    fn extract_numeric_stop_code(&self, stop_id: &str) -> Result<String, DataFormatFatal>;
}
