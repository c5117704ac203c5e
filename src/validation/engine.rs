//! Field and form validation
//!
//! Within a field, rules run in declaration order and stop at the first
//! failure. Across a form, every field is evaluated and reported.

use tracing::{debug, warn};

use super::error::ConfigError;
use super::registry::ValidatorRegistry;
use super::rule::ValidationRule;

/// Result of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationResult {
    pub valid: bool,
    /// Message of the first failing rule
    pub message: Option<String>,
    /// Name of the first failing rule
    pub rule: Option<String>,
}

impl FieldValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
            rule: None,
        }
    }

    pub fn invalid(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            rule: Some(rule.into()),
        }
    }
}

/// Result of validating every field of a form, aligned to the input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidationResult {
    pub valid: bool,
    pub results: Vec<FieldValidationResult>,
}

impl FormValidationResult {
    /// Index of the first invalid field, if any
    pub fn first_invalid(&self) -> Option<usize> {
        self.results.iter().position(|r| !r.valid)
    }

    /// Number of invalid fields
    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| !r.valid).count()
    }
}

/// Validate one value against its declared rules
///
/// A rule with no registered validator is skipped; use
/// [`ValidatorRegistry::check_rules`] to reject such declarations up front.
pub fn validate_field(
    value: &str,
    rules: &[ValidationRule],
    registry: &ValidatorRegistry,
) -> FieldValidationResult {
    for rule in rules {
        let Some(validator) = registry.get(&rule.name) else {
            warn!("no validator registered for rule '{}', skipping", rule.name);
            continue;
        };

        if let Err(message) = validator.validate(value, rule.param()) {
            debug!("rule '{}' failed: {}", rule.name, message);
            return FieldValidationResult::invalid(&rule.name, message);
        }
    }
    FieldValidationResult::valid()
}

/// Validate every `(value, rules)` pair; never stops early across fields
pub fn validate_form<V, R>(fields: &[(V, R)], registry: &ValidatorRegistry) -> FormValidationResult
where
    V: AsRef<str>,
    R: AsRef<[ValidationRule]>,
{
    let results: Vec<FieldValidationResult> = fields
        .iter()
        .map(|(value, rules)| validate_field(value.as_ref(), rules.as_ref(), registry))
        .collect();
    let valid = results.iter().all(|r| r.valid);

    FormValidationResult { valid, results }
}

/// A named field and its declared rules
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: String,
    pub rules: Vec<ValidationRule>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, rules: Vec<ValidationRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}

/// A form whose declarations were checked against a registry at construction
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldDecl>,
    registry: ValidatorRegistry,
}

impl FormSchema {
    /// Check every field's rules and build the schema
    pub fn new(fields: Vec<FieldDecl>, registry: ValidatorRegistry) -> Result<Self, ConfigError> {
        for field in &fields {
            registry.check_rules(&field.rules).map_err(|e| {
                debug!("field '{}' rejected: {}", field.name, e);
                e
            })?;
        }
        Ok(Self::from_checked(fields, registry))
    }

    /// Build a schema whose fields were already checked against `registry`
    pub(crate) fn from_checked(fields: Vec<FieldDecl>, registry: ValidatorRegistry) -> Self {
        Self { fields, registry }
    }

    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Validate one value per declared field, in declaration order
    pub fn validate<S: AsRef<str>>(&self, values: &[S]) -> Result<FormValidationResult, ConfigError> {
        if values.len() != self.fields.len() {
            return Err(ConfigError::FieldCount {
                expected: self.fields.len(),
                actual: values.len(),
            });
        }

        let pairs: Vec<(&str, &[ValidationRule])> = values
            .iter()
            .zip(&self.fields)
            .map(|(value, field)| (value.as_ref(), field.rules.as_slice()))
            .collect();
        Ok(validate_form(&pairs, &self.registry))
    }
}
