//! Stop identifier extraction.
//!
//! Turns raw GTFS `stop_id` values into the integer id and rider-facing
//! stop code the import stores. An identifier with no digits at all is a
//! [`DataFormatFatal`] error.

mod error;
mod extract;

pub use error::DataFormatFatal;
pub use extract::{clean_stop_original_id, extract_numeric_stop_code, extract_numeric_stop_id};
