//! Validator capability and the built-in validators
//!
//! Every validator except `required` treats an empty or whitespace-only
//! value as passing, so a field is optional unless `required` is declared.
//!
//! `pattern` sources use a backtracking engine so look-around assertions,
//! common in HTML `pattern` attributes, are accepted.

use regex::Regex;
use tracing::warn;

/// Outcome of one validator: `Ok(())` or the message to show
pub type Outcome = Result<(), String>;

/// Something that can judge a field value against an optional parameter
pub trait Validator: Send + Sync {
    fn validate(&self, value: &str, param: Option<&str>) -> Outcome;

    /// Whether declaring this rule without a parameter is a configuration error
    fn requires_param(&self) -> bool {
        false
    }

    /// Configuration-time check of a declared parameter; `Err` carries the reason
    fn check_param(&self, _param: &str) -> Result<(), String> {
        Ok(())
    }
}

impl<F> Validator for F
where
    F: Fn(&str, Option<&str>) -> Outcome + Send + Sync,
{
    fn validate(&self, value: &str, param: Option<&str>) -> Outcome {
        self(value, param)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse a value the way a numeric input would: trimmed, finite only
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn check(passes: bool, message: impl FnOnce() -> String) -> Outcome {
    if passes {
        Ok(())
    } else {
        Err(message())
    }
}

/// Non-blank after trimming
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Validator for Required {
    fn validate(&self, value: &str, _param: Option<&str>) -> Outcome {
        check(!is_blank(value), || "This field is required".to_string())
    }
}

/// A simple `local@domain.tld` shape
#[derive(Debug, Clone)]
pub struct Email {
    shape: Regex,
}

impl Email {
    pub fn new() -> Self {
        let shape =
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email shape should be a valid regex");
        Self { shape }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for Email {
    fn validate(&self, value: &str, _param: Option<&str>) -> Outcome {
        check(is_blank(value) || self.shape.is_match(value), || {
            "Invalid email address".to_string()
        })
    }
}

/// A finite number
#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

impl Validator for Number {
    fn validate(&self, value: &str, _param: Option<&str>) -> Outcome {
        check(is_blank(value) || parse_number(value).is_some(), || {
            "Must be a number".to_string()
        })
    }
}

/// Numeric lower bound; a non-numeric value or bound fails
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl Validator for Min {
    fn validate(&self, value: &str, param: Option<&str>) -> Outcome {
        let bound = param.unwrap_or_default();
        let passes = is_blank(value)
            || matches!((parse_number(value), parse_number(bound)), (Some(v), Some(b)) if v >= b);
        check(passes, || format!("Must be at least {}", bound))
    }

    fn requires_param(&self) -> bool {
        true
    }
}

/// Numeric upper bound; a non-numeric value or bound fails
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl Validator for Max {
    fn validate(&self, value: &str, param: Option<&str>) -> Outcome {
        let bound = param.unwrap_or_default();
        let passes = is_blank(value)
            || matches!((parse_number(value), parse_number(bound)), (Some(v), Some(b)) if v <= b);
        check(passes, || format!("Must be at most {}", bound))
    }

    fn requires_param(&self) -> bool {
        true
    }
}

/// Minimum length in characters
#[derive(Debug, Clone, Copy, Default)]
pub struct MinLength;

impl Validator for MinLength {
    fn validate(&self, value: &str, param: Option<&str>) -> Outcome {
        let bound = param.unwrap_or_default();
        let len = value.chars().count() as f64;
        let passes =
            is_blank(value) || matches!(parse_number(bound), Some(b) if len >= b);
        check(passes, || format!("Must be at least {} characters", bound))
    }

    fn requires_param(&self) -> bool {
        true
    }
}

/// Maximum length in characters
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLength;

impl Validator for MaxLength {
    fn validate(&self, value: &str, param: Option<&str>) -> Outcome {
        let bound = param.unwrap_or_default();
        let len = value.chars().count() as f64;
        let passes =
            is_blank(value) || matches!(parse_number(bound), Some(b) if len <= b);
        check(passes, || format!("Must be at most {} characters", bound))
    }

    fn requires_param(&self) -> bool {
        true
    }
}

/// Unanchored regex search; the pattern is the rule parameter
#[derive(Debug, Clone, Copy, Default)]
pub struct Pattern;

impl Validator for Pattern {
    fn validate(&self, value: &str, param: Option<&str>) -> Outcome {
        if is_blank(value) {
            return Ok(());
        }
        let source = param.unwrap_or_default();
        let matched = match fancy_regex::Regex::new(source) {
            Ok(re) => is_match(&re, value),
            Err(e) => {
                warn!("pattern '{}' does not compile: {}", source, e);
                false
            }
        };
        check(matched, || "Invalid format".to_string())
    }

    fn requires_param(&self) -> bool {
        true
    }

    fn check_param(&self, param: &str) -> Result<(), String> {
        fancy_regex::Regex::new(param)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// A match that gives up (backtrack limit) counts as no match
fn is_match(re: &fancy_regex::Regex, value: &str) -> bool {
    re.is_match(value).unwrap_or_else(|e| {
        warn!("pattern '{}' could not be evaluated: {}", re.as_str(), e);
        false
    })
}

/// A fixed regex with its own message, declared in settings
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: fancy_regex::Regex,
    message: String,
}

impl PatternValidator {
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            pattern: fancy_regex::Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for PatternValidator {
    fn validate(&self, value: &str, _param: Option<&str>) -> Outcome {
        check(is_blank(value) || is_match(&self.pattern, value), || {
            self.message.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(Required.validate("x", None).is_ok());
        assert_eq!(
            Required.validate("   ", None),
            Err("This field is required".to_string())
        );
        assert!(Required.validate("", None).is_err());
    }

    #[test]
    fn test_email() {
        let email = Email::new();
        assert!(email.validate("a@b.co", None).is_ok());
        assert!(email.validate("", None).is_ok());
        assert!(email.validate("  ", None).is_ok());
        assert_eq!(
            email.validate("a@b", None),
            Err("Invalid email address".to_string())
        );
        assert!(email.validate("a b@c.d", None).is_err());
        assert!(email.validate("a@@b.c", None).is_err());
    }

    #[test]
    fn test_number() {
        assert!(Number.validate("42", None).is_ok());
        assert!(Number.validate(" -3.5 ", None).is_ok());
        assert!(Number.validate("1e3", None).is_ok());
        assert!(Number.validate("", None).is_ok());
        assert_eq!(Number.validate("abc", None), Err("Must be a number".to_string()));
        assert!(Number.validate("inf", None).is_err());
        assert!(Number.validate("NaN", None).is_err());
    }

    #[test]
    fn test_min_max() {
        assert!(Min.validate("18", Some("18")).is_ok());
        assert_eq!(
            Min.validate("17", Some("18")),
            Err("Must be at least 18".to_string())
        );
        assert!(Min.validate("abc", Some("1")).is_err());
        assert!(Min.validate("5", Some("x")).is_err());
        assert!(Min.validate("", Some("18")).is_ok());

        assert!(Max.validate("10", Some("10")).is_ok());
        assert_eq!(
            Max.validate("11", Some("10")),
            Err("Must be at most 10".to_string())
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        assert!(MinLength.validate("héllo", Some("5")).is_ok());
        assert_eq!(
            MinLength.validate("hi", Some("3")),
            Err("Must be at least 3 characters".to_string())
        );
        assert!(MaxLength.validate("héllo", Some("5")).is_ok());
        assert_eq!(
            MaxLength.validate("héllo!", Some("5")),
            Err("Must be at most 5 characters".to_string())
        );
        assert!(MaxLength.validate("   ", Some("1")).is_ok());
    }

    #[test]
    fn test_pattern_is_unanchored() {
        assert!(Pattern.validate("abc123", Some("[0-9]+")).is_ok());
        assert!(Pattern.validate("abc", Some("^[0-9]+$")).is_err());
        assert_eq!(
            Pattern.validate("abc", Some("(")),
            Err("Invalid format".to_string())
        );
    }

    #[test]
    fn test_pattern_look_ahead() {
        let password = "^(?=.*[A-Z]).{8,}$";
        assert!(Pattern.check_param(password).is_ok());
        assert!(Pattern.validate("Abcdefg1", Some(password)).is_ok());
        assert_eq!(
            Pattern.validate("abcdefg1", Some(password)),
            Err("Invalid format".to_string())
        );
        assert!(Pattern.validate("price: 10", Some(r"(?<=\$)\d+")).is_err());
    }

    #[test]
    fn test_check_param() {
        assert!(Pattern.check_param("([a-z]").is_err());
        assert!(Min.check_param("anything").is_ok());
    }

    #[test]
    fn test_closure_validator() {
        let even = |value: &str, _: Option<&str>| -> Outcome {
            match parse_number(value) {
                Some(n) if n % 2.0 == 0.0 => Ok(()),
                _ => Err("Must be even".to_string()),
            }
        };
        assert!(even.validate("4", None).is_ok());
        assert!(even.validate("3", None).is_err());
        assert!(!even.requires_param());
    }

    #[test]
    fn test_pattern_validator() {
        let zip = PatternValidator::new("^[0-9]{5}$", "Invalid ZIP code").unwrap();
        assert!(zip.validate("12345", None).is_ok());
        assert!(zip.validate("", None).is_ok());
        assert_eq!(
            zip.validate("1234", None),
            Err("Invalid ZIP code".to_string())
        );
        assert!(PatternValidator::new("(", "x").is_err());

        let strong = PatternValidator::new("^(?=.*[0-9])(?=.*[a-z]).+$", "Too weak").unwrap();
        assert!(strong.validate("abc1", None).is_ok());
        assert_eq!(strong.validate("abc", None), Err("Too weak".to_string()));
    }
}
