//! Settings file support
//!
//! A TOML file tunes the placement constants, picks the unknown-rule
//! policy and declares pattern-based validators by name. Every section is
//! optional; an empty file yields the defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::placement::PlacementConfig;
use crate::validation::{PatternValidator, UnknownRulePolicy, ValidatorRegistry};

/// Errors that can occur when loading settings or building a registry from them
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid validator '{name}': {reason}")]
    InvalidValidator { name: String, reason: String },
}

/// Validation engine settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub unknown_rules: UnknownRulePolicy,
}

/// A named validator backed by a fixed regex
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatternValidatorDecl {
    pub pattern: String,
    #[serde(default = "default_pattern_message")]
    pub message: String,
}

fn default_pattern_message() -> String {
    "Invalid format".to_string()
}

/// Parsed settings file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub placement: PlacementConfig,
    pub validation: ValidationSettings,
    /// Custom validators: rule name -> pattern and message
    pub validators: BTreeMap<String, PatternValidatorDecl>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the validator registry these settings describe
    ///
    /// Starts from the built-ins; declared validators are added in name
    /// order and override built-ins of the same name.
    pub fn registry(&self) -> Result<ValidatorRegistry, SettingsError> {
        let mut registry =
            ValidatorRegistry::new().with_unknown_rules(self.validation.unknown_rules);

        for (name, decl) in &self.validators {
            let validator = PatternValidator::new(&decl.pattern, decl.message.as_str()).map_err(
                |e| SettingsError::InvalidValidator {
                    name: name.clone(),
                    reason: e.to_string(),
                },
            )?;
            debug!("registering pattern validator '{}'", name);
            registry = registry.with_validator(name.as_str(), validator);
        }

        Ok(registry)
    }
}
