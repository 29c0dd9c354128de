//! Tokenizer for expression input

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::ParseError;

lazy_static! {
    /// Decimal literal with optional fraction and exponent
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();

    /// Identifier or function name
    static ref IDENT_PATTERN: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl TokenKind {
    /// Source text of punctuation tokens, for error messages
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(v) => v.to_string(),
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Plus => "+".into(),
            TokenKind::Minus => "-".into(),
            TokenKind::Star => "*".into(),
            TokenKind::Slash => "/".into(),
            TokenKind::LParen => "(".into(),
            TokenKind::RParen => ")".into(),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based character column in the full input
    pub column: usize,
}

/// Split one sub-expression into tokens
///
/// `base_column` is the number of characters preceding `input` in the full
/// text, so reported columns point into the original string.
pub fn tokenize(input: &str, base_column: usize) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut column = base_column + 1;

    while pos < input.len() {
        let rest = &input[pos..];
        let Some(ch) = rest.chars().next() else {
            break;
        };

        if ch.is_whitespace() {
            pos += ch.len_utf8();
            column += 1;
            continue;
        }

        let (kind, len) = if let Some(m) = NUMBER_PATTERN.find(rest) {
            let value = m
                .as_str()
                .parse::<f64>()
                .map_err(|_| ParseError::at(format!("invalid number '{}'", m.as_str()), column))?;
            (TokenKind::Number(value), m.end())
        } else if let Some(m) = IDENT_PATTERN.find(rest) {
            (TokenKind::Ident(m.as_str().to_string()), m.end())
        } else {
            let kind = match ch {
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                other => {
                    return Err(ParseError::at(
                        format!("unexpected character '{}'", other),
                        column,
                    ))
                }
            };
            (kind, ch.len_utf8())
        };

        tokens.push(Token { kind, column });
        // Matched text is ASCII, so byte length equals character count
        pos += len;
        column += len;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input, 0)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(
            kinds("3*3+sqrt(a)"),
            vec![
                TokenKind::Number(3.0),
                TokenKind::Star,
                TokenKind::Number(3.0),
                TokenKind::Plus,
                TokenKind::Ident("sqrt".into()),
                TokenKind::LParen,
                TokenKind::Ident("a".into()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_numbers() {
        assert_eq!(kinds("1.5"), vec![TokenKind::Number(1.5)]);
        assert_eq!(kinds(".25"), vec![TokenKind::Number(0.25)]);
        assert_eq!(kinds("2e3"), vec![TokenKind::Number(2000.0)]);
    }

    #[test]
    fn test_tokenize_identifiers() {
        assert_eq!(kinds("x_1"), vec![TokenKind::Ident("x_1".into())]);
        // A leading digit starts a number, not an identifier
        assert_eq!(
            kinds("2x"),
            vec![TokenKind::Number(2.0), TokenKind::Ident("x".into())]
        );
    }

    #[test]
    fn test_tokenize_columns() {
        let tokens = tokenize(" a + b", 4).unwrap();
        let columns: Vec<usize> = tokens.iter().map(|t| t.column).collect();
        assert_eq!(columns, vec![6, 8, 10]);
    }

    #[test]
    fn test_tokenize_rejects_unknown_character() {
        let err = tokenize("a, b", 0).unwrap_err();
        assert_eq!(err.column, Some(2));
        assert!(err.message.contains(','));
    }
}
