//! Declared validation rules

use std::fmt;

/// Names of the validators every registry starts with
pub mod names {
    pub const REQUIRED: &str = "required";
    pub const EMAIL: &str = "email";
    pub const NUMBER: &str = "number";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const MIN_LENGTH: &str = "minLength";
    pub const MAX_LENGTH: &str = "maxLength";
    pub const PATTERN: &str = "pattern";
}

/// A named, optionally parameterized constraint declared against a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationRule {
    pub name: String,
    pub param: Option<String>,
}

impl ValidationRule {
    /// A rule without a parameter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param: None,
        }
    }

    /// A rule with a parameter
    pub fn with_param(name: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param: Some(param.into()),
        }
    }

    pub fn required() -> Self {
        Self::new(names::REQUIRED)
    }

    pub fn email() -> Self {
        Self::new(names::EMAIL)
    }

    pub fn number() -> Self {
        Self::new(names::NUMBER)
    }

    pub fn min(bound: impl Into<String>) -> Self {
        Self::with_param(names::MIN, bound)
    }

    pub fn max(bound: impl Into<String>) -> Self {
        Self::with_param(names::MAX, bound)
    }

    pub fn min_length(len: impl Into<String>) -> Self {
        Self::with_param(names::MIN_LENGTH, len)
    }

    pub fn max_length(len: impl Into<String>) -> Self {
        Self::with_param(names::MAX_LENGTH, len)
    }

    pub fn pattern(source: impl Into<String>) -> Self {
        Self::with_param(names::PATTERN, source)
    }

    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}({:?})", self.name, param),
            None => write!(f, "{}", self.name),
        }
    }
}
