//! Street-type abbreviation dictionary.
//!
//! The dictionary is data, not code: agencies can supply their own table
//! through configuration. What is fixed is the contract that expanding
//! twice gives the same result as expanding once, which construction
//! enforces.

use std::collections::BTreeMap;

use regex::{Captures, Regex};

use super::case::{IgnoredWords, title_case_words};

/// Errors building a street-type table.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StreetTypeError {
    /// An abbreviation was empty or contained non-word characters
    #[error("invalid abbreviation {0:?}")]
    InvalidAbbreviation(String),

    /// A full form would itself be expanded again
    #[error("full form {full:?} for {abbreviation:?} contains the abbreviation {nested:?}")]
    NotIdempotent {
        abbreviation: String,
        full: String,
        nested: String,
    },

    /// The combined pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Abbreviation -> full street type, e.g. `Ave` -> `Avenue`.
///
/// Matching is whole-word and case-insensitive. An abbreviation written with
/// a trailing period (`St.`, `Ave.`) is left alone; `St.` is how a shortened
/// "Saint" is spelled.
///
/// # Examples
///
/// ```
/// use halifax_transit::text::StreetTypeTable;
///
/// let table = StreetTypeTable::default();
/// assert_eq!(table.normalize("Main St / Oak Ave"), "Main Street / Oak Avenue");
/// assert_eq!(table.normalize("St. Margarets Bay Rd"), "St. Margarets Bay Road");
/// ```
#[derive(Debug, Clone)]
pub struct StreetTypeTable {
    /// Lowercased abbreviation -> title-cased full form.
    entries: BTreeMap<String, String>,
    pattern: Option<Regex>,
}

impl StreetTypeTable {
    /// Build a table from abbreviation/full-form pairs.
    ///
    /// Full forms are title-cased. Fails if any word of a full form is
    /// itself one of the abbreviations.
    pub fn new<I, A, F>(pairs: I) -> Result<Self, StreetTypeError>
    where
        I: IntoIterator<Item = (A, F)>,
        A: AsRef<str>,
        F: AsRef<str>,
    {
        let none = IgnoredWords::default();
        let mut entries = BTreeMap::new();
        for (abbr, full) in pairs {
            let abbr = abbr.as_ref().trim();
            if abbr.is_empty() || !abbr.chars().all(|c| c.is_alphanumeric()) {
                return Err(StreetTypeError::InvalidAbbreviation(abbr.to_string()));
            }
            let full = title_case_words(full.as_ref().trim(), &none);
            entries.insert(abbr.to_lowercase(), full);
        }

        for (abbr, full) in &entries {
            let nested = full
                .split(|c: char| !c.is_alphanumeric())
                .find(|word| entries.contains_key(&word.to_lowercase()));
            if let Some(nested) = nested {
                return Err(StreetTypeError::NotIdempotent {
                    abbreviation: abbr.clone(),
                    full: full.clone(),
                    nested: nested.to_string(),
                });
            }
        }

        let pattern = if entries.is_empty() {
            None
        } else {
            // Longest first so that "Cres" wins over a hypothetical "Cr".
            let mut keys: Vec<&String> = entries.keys().collect();
            keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
            let alternation = keys
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"(?i)\b({alternation})\b(\.)?"))?)
        };

        Ok(Self { entries, pattern })
    }

    /// Expand abbreviated street types in `text`.
    pub fn normalize(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        pattern
            .replace_all(text, |caps: &Captures| {
                if caps.get(2).is_some() {
                    return caps[0].to_string();
                }
                self.entries
                    .get(&caps[1].to_lowercase())
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Common Canadian street-type abbreviations.
pub const DEFAULT_STREET_TYPES: &[(&str, &str)] = &[
    ("Av", "Avenue"),
    ("Ave", "Avenue"),
    ("Blvd", "Boulevard"),
    ("Cir", "Circle"),
    ("Cres", "Crescent"),
    ("Crt", "Court"),
    ("Ct", "Court"),
    ("Dr", "Drive"),
    ("Hwy", "Highway"),
    ("Ln", "Lane"),
    ("Pkwy", "Parkway"),
    ("Pl", "Place"),
    ("Rd", "Road"),
    ("Sq", "Square"),
    ("St", "Street"),
    ("Ter", "Terrace"),
    ("Terr", "Terrace"),
];

impl Default for StreetTypeTable {
    fn default() -> Self {
        Self::new(DEFAULT_STREET_TYPES.iter().copied())
            .expect("default street types are idempotent")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn words() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just("St"),
                Just("St."),
                Just("Ave"),
                Just("rd"),
                Just("Street"),
                Just("Main"),
                Just("/"),
                Just("Hwy"),
                Just("Terr"),
            ],
            0..8,
        )
        .prop_map(|w| w.join(" "))
    }

    proptest! {
        /// Expanding twice is the same as expanding once
        #[test]
        fn idempotent(s in words()) {
            let table = StreetTypeTable::default();
            let once = table.normalize(&s);
            prop_assert_eq!(table.normalize(&once), once);
        }
    }
}
