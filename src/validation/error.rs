//! Configuration errors for the validation engine
//!
//! Field failures are ordinary results, not errors. These cover forms whose
//! declared rules cannot be evaluated as written.

use thiserror::Error;

/// A rule declaration rejected at form construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Rule name with no registered validator (only under the reject policy)
    #[error("unknown validation rule '{rule}'")]
    UnknownRule { rule: String },

    /// Rule whose validator needs a parameter but none was declared
    #[error("validation rule '{rule}' requires a parameter")]
    MissingParameter { rule: String },

    /// Parameter the rule's validator refuses, e.g. a `pattern` that does not compile
    #[error("invalid parameter '{param}' for rule '{rule}': {reason}")]
    InvalidParameter {
        rule: String,
        param: String,
        reason: String,
    },

    /// Values supplied for a different number of fields than the form declares
    #[error("expected {expected} field values, got {actual}")]
    FieldCount { expected: usize, actual: usize },
}

impl ConfigError {
    pub fn unknown_rule(rule: impl Into<String>) -> Self {
        Self::UnknownRule { rule: rule.into() }
    }

    pub fn missing_parameter(rule: impl Into<String>) -> Self {
        Self::MissingParameter { rule: rule.into() }
    }

    pub fn invalid_parameter(
        rule: impl Into<String>,
        param: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidParameter {
            rule: rule.into(),
            param: param.into(),
            reason: reason.to_string(),
        }
    }
}
