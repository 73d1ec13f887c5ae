//! Agency configuration error types.

use std::path::PathBuf;

use crate::text::StreetTypeError;

/// Errors loading or validating agency configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two short names map to the same route id
    #[error("route id {id} assigned to both {first:?} and {second:?}")]
    DuplicateRouteId {
        id: u64,
        first: String,
        second: String,
    },

    /// A missing-color rule has an empty keyword
    #[error("color keyword must not be empty")]
    EmptyColorKeyword,

    /// Street-type dictionary is unusable
    #[error("invalid street types: {0}")]
    StreetTypes(#[from] StreetTypeError),
}
