//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::ParseError;
use crate::parser::ast::*;
use crate::parser::lexer::{lex, Token};
use crate::validation::ValidationRule;

/// Parse a rule declaration into its syntax tree
pub fn parse(input: &str) -> Result<RuleList, Vec<ParseError>> {
    let len = input.len();

    let mut tokens: Vec<(Token, SimpleSpan)> = Vec::new();
    for (tok, span) in lex(input) {
        match tok {
            Ok(tok) => tokens.push((tok, SimpleSpan::from(span))),
            Err(()) => return Err(vec![ParseError::unexpected_char(input, span)]),
        }
    }

    let token_stream = Stream::from_iter(tokens.into_iter())
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    rule_list_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Parse a rule declaration straight into validation rules
pub fn parse_rules(input: &str) -> Result<Vec<ValidationRule>, Vec<ParseError>> {
    parse(input).map(|list| list.to_rules())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn rule_list_parser<'a, I>() -> impl Parser<'a, I, RuleList, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let name = select! {
        Token::Ident(s) => s,
    }
    .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

    let param_value = select! {
        Token::String(s) => ParamValue::String(s),
        Token::Number(n) => ParamValue::Number(n),
        Token::Ident(s) => ParamValue::Identifier(s),
    }
    .map_with(|v, e| Spanned::new(v, span_range(&e.span())));

    let param = param_value.delimited_by(just(Token::ParenOpen), just(Token::ParenClose));

    let rule = name
        .then(param.or_not())
        .map_with(|(name, param), e| Spanned::new(RuleDecl { name, param }, span_range(&e.span())));

    // Separators are optional: whitespace alone also separates rules
    let separator = choice((just(Token::Comma), just(Token::Pipe)));

    rule.then_ignore(separator.or_not())
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
        .map(|rules| RuleList { rules })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_bare_rules() {
        let rules = parse_rules("required email").expect("Should parse");
        assert_eq!(rules, vec![ValidationRule::required(), ValidationRule::email()]);
    }

    #[test]
    fn test_parse_parameters() {
        let rules = parse_rules(r#"minLength(3) max(-2.5) pattern("^[a-z]+$") zip(us)"#)
            .expect("Should parse");
        assert_eq!(
            rules,
            vec![
                ValidationRule::min_length("3"),
                ValidationRule::max("-2.5"),
                ValidationRule::pattern("^[a-z]+$"),
                ValidationRule::with_param("zip", "us"),
            ]
        );
    }

    #[test]
    fn test_parse_exponent_and_leading_dot_bounds() {
        let rules = parse_rules("max(1e3) min(.5)").expect("Should parse");
        assert_eq!(rules, vec![ValidationRule::max("1e3"), ValidationRule::min(".5")]);
    }

    #[test]
    fn test_parse_separators() {
        let comma = parse_rules("required, email").unwrap();
        let pipe = parse_rules("required|email").unwrap();
        assert_eq!(comma, pipe);
        assert_eq!(comma.len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_rules("").unwrap(), Vec::<ValidationRule>::new());
        assert_eq!(parse_rules("   ").unwrap(), Vec::<ValidationRule>::new());
    }

    #[test]
    fn test_spans_recorded() {
        let list = parse("required minLength(3)").unwrap();
        assert_eq!(list.rules[0].span, 0..8);
        assert_eq!(list.rules[1].node.name.span, 9..18);
        assert_eq!(list.rules[1].node.param.as_ref().unwrap().span, 19..20);
    }

    #[test]
    fn test_unclosed_paren_is_error() {
        let errors = parse_rules("minLength(3").unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_leading_separator_is_error() {
        assert!(parse_rules(", required").is_err());
    }

    #[test]
    fn test_invalid_character_is_error() {
        let errors = parse_rules("required ; email").unwrap_err();
        assert_eq!(errors[0].span(), &(9..10));
    }
}
