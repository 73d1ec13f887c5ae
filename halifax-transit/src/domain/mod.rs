//! Domain types for the agency rules.
//!
//! These types represent validated values handed to and from the host
//! import pipeline. Types that carry an invariant enforce it at
//! construction time.

mod color;
mod label;

pub use color::{HexColor, InvalidHexColor};
pub use label::{LabelCategory, TextLabel, UnknownCategory};
