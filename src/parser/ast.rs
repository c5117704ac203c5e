//! Syntax tree for rule declarations

use crate::validation::ValidationRule;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A rule parameter as written
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    /// Numeric literal, raw text
    Number(String),
    Identifier(String),
}

impl ParamValue {
    pub fn as_str(&self) -> &str {
        match self {
            ParamValue::String(s) | ParamValue::Number(s) | ParamValue::Identifier(s) => s,
        }
    }
}

/// `name` or `name(param)`
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDecl {
    pub name: Spanned<String>,
    pub param: Option<Spanned<ParamValue>>,
}

impl RuleDecl {
    pub fn to_rule(&self) -> ValidationRule {
        ValidationRule {
            name: self.name.node.clone(),
            param: self.param.as_ref().map(|p| p.node.as_str().to_string()),
        }
    }
}

/// Root node: a field's rules in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct RuleList {
    pub rules: Vec<Spanned<RuleDecl>>,
}

impl RuleList {
    pub fn to_rules(&self) -> Vec<ValidationRule> {
        self.rules.iter().map(|r| r.node.to_rule()).collect()
    }
}
