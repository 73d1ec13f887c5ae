//! Agency rules consumed by a GTFS import pipeline.
//!
//! [`AgencyRules`] is the set of hooks the host calls once per record;
//! [`HalifaxTransit`] implements it from an [`AgencyConfig`].

mod colors;
mod config;
mod error;
mod halifax;
mod routes;
mod rules;

pub use colors::{ColorKeyword, ColorRules};
pub use config::{AGENCY_COLOR_BLUE, AgencyConfig, EXPRESS_RED, LEGACY_PURPLE, METROX_YELLOW};
pub use error::ConfigError;
pub use halifax::HalifaxTransit;
pub use routes::{RouteIdTable, clean_route_short_name};
pub use rules::{AgencyInfo, AgencyRules, RouteType};
