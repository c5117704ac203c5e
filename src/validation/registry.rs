//! Registry mapping rule names to validators
//!
//! A registry is assembled once, when a form is configured, and is read-only
//! afterwards: every builder method consumes and returns the registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::error::ConfigError;
use super::rule::{names, ValidationRule};
use super::validators::{Email, Max, MaxLength, Min, MinLength, Number, Pattern, Required, Validator};

/// What to do with a declared rule that has no registered validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRulePolicy {
    /// Treat the rule as passing
    #[default]
    Pass,
    /// Refuse the declaration when the form is configured
    Reject,
}

/// Immutable name → validator mapping
#[derive(Clone)]
pub struct ValidatorRegistry {
    validators: HashMap<String, Arc<dyn Validator>>,
    unknown_rules: UnknownRulePolicy,
}

impl ValidatorRegistry {
    /// A registry holding the built-in validators
    pub fn new() -> Self {
        let mut validators: HashMap<String, Arc<dyn Validator>> = HashMap::new();
        validators.insert(names::REQUIRED.to_string(), Arc::new(Required));
        validators.insert(names::EMAIL.to_string(), Arc::new(Email::new()));
        validators.insert(names::NUMBER.to_string(), Arc::new(Number));
        validators.insert(names::MIN.to_string(), Arc::new(Min));
        validators.insert(names::MAX.to_string(), Arc::new(Max));
        validators.insert(names::MIN_LENGTH.to_string(), Arc::new(MinLength));
        validators.insert(names::MAX_LENGTH.to_string(), Arc::new(MaxLength));
        validators.insert(names::PATTERN.to_string(), Arc::new(Pattern));

        Self {
            validators,
            unknown_rules: UnknownRulePolicy::default(),
        }
    }

    /// A registry with no validators at all
    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
            unknown_rules: UnknownRulePolicy::default(),
        }
    }

    /// Add a validator, replacing any existing one with the same name
    pub fn with_validator(mut self, name: impl Into<String>, validator: impl Validator + 'static) -> Self {
        let name = name.into();
        if self.validators.contains_key(&name) {
            debug!("custom validator '{}' replaces an existing one", name);
        }
        self.validators.insert(name, Arc::new(validator));
        self
    }

    /// Set the policy for rules with no registered validator
    pub fn with_unknown_rules(mut self, policy: UnknownRulePolicy) -> Self {
        self.unknown_rules = policy;
        self
    }

    pub fn unknown_rules(&self) -> UnknownRulePolicy {
        self.unknown_rules
    }

    /// Get a validator by name
    pub fn get(&self, name: &str) -> Option<&dyn Validator> {
        self.validators.get(name).map(|v| v.as_ref())
    }

    /// Check if a validator exists
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.validators.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Configuration-time check of a field's declared rules
    ///
    /// Unknown names fail only under [`UnknownRulePolicy::Reject`]. Missing
    /// parameters and parameters the validator refuses always fail.
    pub fn check_rules(&self, rules: &[ValidationRule]) -> Result<(), ConfigError> {
        for rule in rules {
            let Some(validator) = self.get(&rule.name) else {
                match self.unknown_rules {
                    UnknownRulePolicy::Pass => {
                        debug!("rule '{}' has no validator and will pass", rule.name);
                        continue;
                    }
                    UnknownRulePolicy::Reject => return Err(ConfigError::unknown_rule(&rule.name)),
                }
            };

            if validator.requires_param() && rule.param.is_none() {
                return Err(ConfigError::missing_parameter(&rule.name));
            }

            if let Some(param) = rule.param() {
                validator
                    .check_param(param)
                    .map_err(|reason| ConfigError::invalid_parameter(&rule.name, param, reason))?;
            }
        }
        Ok(())
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.names())
            .field("unknown_rules", &self.unknown_rules)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validators::Outcome;

    #[test]
    fn test_builtins_registered() {
        let registry = ValidatorRegistry::new();
        assert_eq!(
            registry.names(),
            vec![
                "email",
                "max",
                "maxLength",
                "min",
                "minLength",
                "number",
                "pattern",
                "required"
            ]
        );
        assert_eq!(registry.unknown_rules(), UnknownRulePolicy::Pass);
    }

    #[test]
    fn test_custom_validator_overrides_builtin() {
        let registry = ValidatorRegistry::new().with_validator(
            "required",
            |_: &str, _: Option<&str>| -> Outcome { Err("Nope".to_string()) },
        );
        let required = registry.get("required").unwrap();
        assert_eq!(required.validate("x", None), Err("Nope".to_string()));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_check_rules_pass_policy_skips_unknown() {
        let registry = ValidatorRegistry::new();
        assert!(registry
            .check_rules(&[ValidationRule::new("zip"), ValidationRule::required()])
            .is_ok());
    }

    #[test]
    fn test_check_rules_reject_policy() {
        let registry = ValidatorRegistry::new().with_unknown_rules(UnknownRulePolicy::Reject);
        assert_eq!(
            registry.check_rules(&[ValidationRule::required(), ValidationRule::new("zip")]),
            Err(ConfigError::unknown_rule("zip"))
        );
    }

    #[test]
    fn test_check_rules_missing_param() {
        let registry = ValidatorRegistry::new();
        assert_eq!(
            registry.check_rules(&[ValidationRule::new("minLength")]),
            Err(ConfigError::missing_parameter("minLength"))
        );
    }

    #[test]
    fn test_check_rules_invalid_pattern() {
        let registry = ValidatorRegistry::new();
        let err = registry
            .check_rules(&[ValidationRule::pattern("([a-z]")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { ref rule, .. } if rule == "pattern"));
    }

    #[test]
    fn test_check_rules_look_ahead_pattern() {
        let registry = ValidatorRegistry::new();
        assert!(registry
            .check_rules(&[ValidationRule::pattern("^(?=.*[A-Z]).{8,}$")])
            .is_ok());
    }

    #[test]
    fn test_overridden_pattern_checks_its_own_param() {
        let glob = |value: &str, param: Option<&str>| -> Outcome {
            let suffix = param.unwrap_or_default().trim_start_matches('*');
            if value.ends_with(suffix) {
                Ok(())
            } else {
                Err("Wrong file type".to_string())
            }
        };
        let registry = ValidatorRegistry::new().with_validator("pattern", glob);
        assert_eq!(registry.check_rules(&[ValidationRule::pattern("*.txt")]), Ok(()));
        let pattern = registry.get("pattern").unwrap();
        assert!(pattern.validate("notes.txt", Some("*.txt")).is_ok());
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = ValidatorRegistry::empty().with_validator(
            "even",
            |_: &str, _: Option<&str>| -> Outcome { Ok(()) },
        );
        insta::assert_snapshot!(
            format!("{:?}", registry),
            @r#"ValidatorRegistry { validators: ["even"], unknown_rules: Pass }"#
        );
    }
}
