//! Route color type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid color code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color code: {reason}")]
pub struct InvalidHexColor {
    reason: &'static str,
}

/// A valid 6-digit hexadecimal RGB color, as used by GTFS `route_color`.
///
/// Input is accepted in either case and stored uppercase, so two colors
/// compare equal regardless of how the feed spelled them.
///
/// # Examples
///
/// ```
/// use halifax_transit::domain::HexColor;
///
/// let blue = HexColor::parse("00558c").unwrap();
/// assert_eq!(blue.as_str(), "00558C");
///
/// // A leading '#' is not part of a GTFS color
/// assert!(HexColor::parse("#00558C").is_err());
/// assert!(HexColor::parse("0055").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 6]);

impl HexColor {
    /// Parse a color from a string of exactly 6 hex digits.
    pub fn parse(s: &str) -> Result<Self, InvalidHexColor> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidHexColor {
                reason: "must be exactly 6 characters",
            });
        }

        let mut out = [0u8; 6];
        for (slot, &b) in out.iter_mut().zip(bytes) {
            if !b.is_ascii_hexdigit() {
                return Err(InvalidHexColor {
                    reason: "must be hexadecimal digits 0-9, A-F",
                });
            }
            *slot = b.to_ascii_uppercase();
        }

        Ok(HexColor(out))
    }

    /// Build a color from a literal known to be valid.
    pub(crate) const fn from_static(s: &'static str) -> Self {
        let b = s.as_bytes();
        HexColor([b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Case-insensitive comparison against a raw feed value.
    pub fn matches(&self, raw: &str) -> bool {
        raw.eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({})", self.as_str())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 6 hex digits parse, and come back uppercased
        #[test]
        fn valid_always_parses(s in "[0-9a-fA-F]{6}") {
            let c = HexColor::parse(&s).unwrap();
            prop_assert_eq!(c.as_str(), s.to_ascii_uppercase());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9A-F]{0,5}|[0-9A-F]{7,12}") {
            prop_assert!(HexColor::parse(&s).is_err());
        }
    }
}
