//! Lexer for the rule declaration language using logos

use logos::Logos;

use super::ast::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Delimiters
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,

    // Literals
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Only \" is unescaped; other backslashes survive for regex sources
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].replace("\\\"", "\"")
    })]
    String(String),

    // Raw text is kept so messages echo the number as written
    #[regex(r"-?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
}

/// Lex input string into tokens with spans; `Err` marks an unrecognized character
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).filter_map(|(t, _)| t.ok()).collect()
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            tokens("required minLength data-zip"),
            vec![
                Token::Ident("required".to_string()),
                Token::Ident("minLength".to_string()),
                Token::Ident("data-zip".to_string()),
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            tokens("( ) , |"),
            vec![
                Token::ParenOpen,
                Token::ParenClose,
                Token::Comma,
                Token::Pipe
            ]
        );
    }

    #[test]
    fn test_numbers_keep_raw_text() {
        assert_eq!(
            tokens("5 -2.50"),
            vec![
                Token::Number("5".to_string()),
                Token::Number("-2.50".to_string())
            ]
        );
    }

    #[test]
    fn test_numbers_with_exponent_or_leading_dot() {
        assert_eq!(
            tokens("1e3 .5 -2.5E-2 7."),
            vec![
                Token::Number("1e3".to_string()),
                Token::Number(".5".to_string()),
                Token::Number("-2.5E-2".to_string()),
                Token::Number("7.".to_string()),
            ]
        );
    }

    #[test]
    fn test_string_keeps_regex_escapes() {
        assert_eq!(
            tokens(r#""^\d+\.\d{2}$""#),
            vec![Token::String(r"^\d+\.\d{2}$".to_string())]
        );
        assert_eq!(
            tokens(r#""say \"hi\"""#),
            vec![Token::String(r#"say "hi""#.to_string())]
        );
    }

    #[test]
    fn test_invalid_character() {
        let results: Vec<_> = lex("required ; email").collect();
        assert!(results[1].0.is_err());
        assert_eq!(results[1].1, 9..10);
    }
}
