//! Parser for the rule declaration language
//!
//! `required email minLength(3) pattern("^[a-z]+$")`

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::{parse, parse_rules};
