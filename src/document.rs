//! TOML input documents
//!
//! A document lists placement requests under `[[placement]]` and form
//! fields under `[[field]]`. Fields declare rules through input attributes
//! (`type`, `required`, `min`, `minlength`, ...), a `rules` declaration
//! string, or both; the declaration string's rules run last.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ParseError;
use crate::parser::parse_rules;
use crate::placement::{resolve_with_config, PlacementConfig, PlacementRequest, PlacementResult};
use crate::validation::{
    ConfigError, FieldAttributes, FieldDecl, FormSchema, FormValidationResult, InputKind,
    ValidatorRegistry,
};

/// Errors that can occur while loading or evaluating a document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read document: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse document TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid rules for field '{field}': {}", format_parse_errors(.errors))]
    Rules {
        field: String,
        source_text: String,
        errors: Vec<ParseError>,
    },
    #[error("field '{field}': {source}")]
    Config {
        field: String,
        #[source]
        source: ConfigError,
    },
    #[error("form: {0}")]
    Form(#[from] ConfigError),
}

impl DocumentError {
    /// Human-readable report; rule declaration errors are annotated with
    /// their source text, labelled with the field name
    pub fn report(&self) -> String {
        match self {
            DocumentError::Rules {
                field,
                source_text,
                errors,
            } => errors
                .iter()
                .map(|e| e.format(source_text, field))
                .collect(),
            other => format!("Error: {}\n", other),
        }
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// An attribute value written as either a TOML string or number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => write!(f, "{}", s),
            AttrValue::Integer(n) => write!(f, "{}", n),
            AttrValue::Float(n) => write!(f, "{}", n),
        }
    }
}

/// A named placement request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlacementEntry {
    pub name: String,
    #[serde(flatten)]
    pub request: PlacementRequest,
}

/// A form field with its current value
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: InputKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    pub min: Option<AttrValue>,
    pub max: Option<AttrValue>,
    #[serde(rename = "minlength")]
    pub min_length: Option<AttrValue>,
    #[serde(rename = "maxlength")]
    pub max_length: Option<AttrValue>,
    pub pattern: Option<String>,
    /// Rule declaration, e.g. `"zip minLength(5)"`
    pub rules: Option<String>,
}

impl FieldEntry {
    /// Attributes of this field, with declared rules as extras
    pub fn attributes(&self) -> Result<FieldAttributes, DocumentError> {
        let custom = match &self.rules {
            Some(source) => parse_rules(source).map_err(|errors| DocumentError::Rules {
                field: self.name.clone(),
                source_text: source.clone(),
                errors,
            })?,
            None => Vec::new(),
        };

        Ok(FieldAttributes {
            kind: self.kind.clone(),
            required: self.required,
            disabled: self.disabled,
            min: self.min.as_ref().map(|v| v.to_string()),
            max: self.max.as_ref().map(|v| v.to_string()),
            min_length: self.min_length.as_ref().map(|v| v.to_string()),
            max_length: self.max_length.as_ref().map(|v| v.to_string()),
            pattern: self.pattern.clone(),
            custom,
        })
    }
}

/// Parsed input document
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub placement: Vec<PlacementEntry>,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldEntry>,
}

impl Document {
    /// Load a document from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a document from a TOML string
    pub fn from_str(content: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve every placement entry, in document order
    pub fn resolve_placements(&self, config: &PlacementConfig) -> Vec<(&str, PlacementResult)> {
        self.placement
            .iter()
            .map(|entry| (entry.name.as_str(), resolve_with_config(&entry.request, config)))
            .collect()
    }

    /// Build a checked form from the field entries
    ///
    /// Disabled and hidden fields get no rules. Each field is checked once,
    /// so errors carry the field name.
    pub fn form_schema(&self, registry: &ValidatorRegistry) -> Result<FormSchema, DocumentError> {
        let mut decls = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let rules = field.attributes()?.effective_rules();
            registry
                .check_rules(&rules)
                .map_err(|source| DocumentError::Config {
                    field: field.name.clone(),
                    source,
                })?;
            decls.push(FieldDecl::new(field.name.as_str(), rules));
        }

        Ok(FormSchema::from_checked(decls, registry.clone()))
    }

    /// Validate every field entry against its current value
    pub fn validate_fields(
        &self,
        registry: &ValidatorRegistry,
    ) -> Result<FormValidationResult, DocumentError> {
        let schema = self.form_schema(registry)?;
        let values: Vec<&str> = self.fields.iter().map(|f| f.value.as_str()).collect();
        Ok(schema.validate(&values)?)
    }
}
