//! FlexaFlow - placement and validation core for interactive form widgets
//!
//! This library positions floating panels (dropdowns, tooltips, popovers)
//! against an anchor inside the viewport, and validates form field values
//! against declarative rule lists.
//!
//! # Example
//!
//! ```rust
//! use flexaflow::validate;
//!
//! let result = validate("ab", "required minLength(3)").unwrap();
//! assert!(!result.valid);
//! assert_eq!(result.message.as_deref(), Some("Must be at least 3 characters"));
//! ```

pub mod document;
pub mod error;
pub mod parser;
pub mod placement;
pub mod settings;
pub mod validation;

pub use document::{Document, DocumentError};
pub use error::ParseError;
pub use parser::parse_rules;
pub use placement::{
    resolve, resolve_with_config, PlacementConfig, PlacementError, PlacementHint,
    PlacementRequest, PlacementResult,
};
pub use settings::{Settings, SettingsError};
pub use validation::{
    validate_field, validate_form, ConfigError, FieldValidationResult, FormValidationResult,
    ValidationRule, Validator, ValidatorRegistry,
};

use thiserror::Error;

/// Errors from validating a value against a textual rule declaration
#[derive(Debug, Error)]
pub enum DeclarationError {
    /// The declaration did not parse
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// The declaration parsed but the registry refuses it
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<Vec<ParseError>> for DeclarationError {
    fn from(errors: Vec<ParseError>) -> Self {
        DeclarationError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a value against a rule declaration using the built-in validators
///
/// # Example
///
/// ```rust
/// use flexaflow::validate;
///
/// assert!(validate("a@b.io", "required email").unwrap().valid);
/// assert!(validate("x", "min(").is_err());
/// ```
pub fn validate(value: &str, declaration: &str) -> Result<FieldValidationResult, DeclarationError> {
    validate_with_registry(value, declaration, &ValidatorRegistry::new())
}

/// Validate a value against a rule declaration using a custom registry
///
/// The declaration is checked against the registry before evaluation, so a
/// rejecting registry reports unknown rules instead of skipping them.
///
/// # Example
///
/// ```rust
/// use flexaflow::{validate_with_registry, ValidatorRegistry};
///
/// let registry = ValidatorRegistry::new().with_validator("even", |value: &str, _: Option<&str>| {
///     match value.parse::<i64>() {
///         Ok(n) if n % 2 == 0 => Ok(()),
///         _ => Err("Must be even".to_string()),
///     }
/// });
///
/// let result = validate_with_registry("7", "number even", &registry).unwrap();
/// assert_eq!(result.message.as_deref(), Some("Must be even"));
/// ```
pub fn validate_with_registry(
    value: &str,
    declaration: &str,
    registry: &ValidatorRegistry,
) -> Result<FieldValidationResult, DeclarationError> {
    let rules = parse_rules(declaration)?;
    registry.check_rules(&rules)?;
    Ok(validate_field(value, &rules, registry))
}
