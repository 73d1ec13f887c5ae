//! Shared text primitives used by the label pipelines.
//!
//! Each function here is a pure, total `&str -> String` transform and is
//! idempotent on its own. The agency pipelines in
//! [`canonicalize`](crate::canonicalize) chain them with agency-specific
//! patterns.

mod case;
mod connectors;
mod destination;
mod label;
mod numbers;
mod street_types;

pub use case::{IgnoredWords, title_case_words};
pub use connectors::{mark_leading_saint, normalize_ampersand, normalize_at, normalize_saint};
pub use destination::keep_to_and_remove_via;
pub use label::trim_label;
pub use numbers::normalize_numbers;
pub use street_types::{DEFAULT_STREET_TYPES, StreetTypeError, StreetTypeTable};
