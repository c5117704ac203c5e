//! Validation engine for form fields
//!
//! Rules are evaluated against a [`ValidatorRegistry`] that is built once
//! and passed explicitly into every call.

pub mod engine;
pub mod error;
pub mod field;
pub mod registry;
pub mod rule;
pub mod validators;

pub use engine::{
    validate_field, validate_form, FieldDecl, FieldValidationResult, FormSchema,
    FormValidationResult,
};
pub use error::ConfigError;
pub use field::{validate_input, FieldAttributes, InputKind};
pub use registry::{UnknownRulePolicy, ValidatorRegistry};
pub use rule::ValidationRule;
pub use validators::{Outcome, PatternValidator, Validator};
