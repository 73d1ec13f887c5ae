//! Halifax Transit agency rules for a GTFS import pipeline.
//!
//! Supplies the agency-specific pieces a generic importer needs: stable
//! route ids, route colors, cleaned route/headsign/stop labels, and
//! numeric stop ids.

pub mod agency;
pub mod canonicalize;
pub mod domain;
pub mod filter;
pub mod stops;
pub mod text;
