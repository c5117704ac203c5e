//! Error types for the placement resolver

use thiserror::Error;

/// Errors raised while building placement requests
///
/// Resolution itself never fails; these only surface when a request is
/// assembled from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// A placement hint outside the supported set
    #[error("unknown placement '{hint}' (expected one of: {expected})")]
    UnknownHint { hint: String, expected: String },
}

impl PlacementError {
    /// Create an unknown hint error listing the accepted spellings
    pub fn unknown_hint(hint: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownHint {
            hint: hint.into(),
            expected: expected.join(", "),
        }
    }
}
