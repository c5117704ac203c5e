//! Deriving rule lists from input attributes
//!
//! Mirrors how a form input's markup declares its constraints: the
//! `required` flag, the input type, numeric bounds, length bounds, a
//! pattern, and any `data-validate-*` extras.

use serde::Deserialize;

use super::engine::{validate_field, FieldValidationResult};
use super::registry::ValidatorRegistry;
use super::rule::ValidationRule;

/// The `type` of a form input, as far as validation cares
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Number,
    Hidden,
    Other(String),
}

impl From<String> for InputKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "text" => InputKind::Text,
            "email" => InputKind::Email,
            "number" => InputKind::Number,
            "hidden" => InputKind::Hidden,
            _ => InputKind::Other(kind),
        }
    }
}

impl From<&str> for InputKind {
    fn from(kind: &str) -> Self {
        InputKind::from(kind.to_string())
    }
}

/// Validation-relevant attributes of one input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldAttributes {
    pub kind: InputKind,
    pub required: bool,
    pub disabled: bool,
    pub min: Option<String>,
    pub max: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub pattern: Option<String>,
    /// Extra rules, in declaration order
    pub custom: Vec<ValidationRule>,
}

impl FieldAttributes {
    pub fn new(kind: impl Into<InputKind>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn with_min_length(mut self, len: impl Into<String>) -> Self {
        self.min_length = Some(len.into());
        self
    }

    pub fn with_max_length(mut self, len: impl Into<String>) -> Self {
        self.max_length = Some(len.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.custom.push(rule);
        self
    }

    /// Inputs that are never validated
    pub fn is_exempt(&self) -> bool {
        self.disabled || self.kind == InputKind::Hidden
    }

    /// The ordered rule list these attributes declare
    ///
    /// `min` and `max` only apply to number inputs.
    pub fn rules(&self) -> Vec<ValidationRule> {
        let mut rules = Vec::new();

        if self.required {
            rules.push(ValidationRule::required());
        }

        match self.kind {
            InputKind::Email => rules.push(ValidationRule::email()),
            InputKind::Number => {
                rules.push(ValidationRule::number());
                if let Some(min) = &self.min {
                    rules.push(ValidationRule::min(min.as_str()));
                }
                if let Some(max) = &self.max {
                    rules.push(ValidationRule::max(max.as_str()));
                }
            }
            _ => {}
        }

        if let Some(len) = &self.min_length {
            rules.push(ValidationRule::min_length(len.as_str()));
        }
        if let Some(len) = &self.max_length {
            rules.push(ValidationRule::max_length(len.as_str()));
        }
        if let Some(pattern) = &self.pattern {
            rules.push(ValidationRule::pattern(pattern.as_str()));
        }

        rules.extend(self.custom.iter().cloned());
        rules
    }

    /// The rules actually evaluated: none for exempt inputs
    pub fn effective_rules(&self) -> Vec<ValidationRule> {
        if self.is_exempt() {
            Vec::new()
        } else {
            self.rules()
        }
    }
}

/// Validate an input's current value against the rules its attributes declare
pub fn validate_input(
    attrs: &FieldAttributes,
    value: &str,
    registry: &ValidatorRegistry,
) -> FieldValidationResult {
    validate_field(value, &attrs.effective_rules(), registry)
}
