//! Stop identifier error types.

/// A stop identifier the import has no policy for.
///
/// This is not recoverable: the same feed always produces the same error,
/// so the host should stop the import and report the raw identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected stop identifier {raw:?}: {reason}")]
pub struct DataFormatFatal {
    raw: String,
    reason: &'static str,
}

impl DataFormatFatal {
    pub(crate) fn new(raw: &str, reason: &'static str) -> Self {
        Self {
            raw: raw.to_string(),
            reason,
        }
    }

    /// The identifier exactly as it appeared in the feed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }
}
