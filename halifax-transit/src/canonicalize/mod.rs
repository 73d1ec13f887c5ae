//! Label canonicalization.
//!
//! Route long names, trip headsigns and stop names each have an ordered
//! pipeline of rewrite passes. Passes are pure string transforms; a
//! pattern that finds nothing is a no-op, so every input (including the
//! empty string) produces an output.

mod pass;
mod pipeline;
mod rules;

pub use pass::{Pass, PassContext};
pub use pipeline::{Canonicalizer, passes};

#[cfg(test)]
mod proptests;
