//! Recursive-descent parser for expressions and equation chains
//!
//! Grammar, lowest to highest precedence:
//!
//! ```text
//! equation       := expr ('=' expr)*
//! expr           := term (('+' | '-') term)*
//! term           := unary (('*' | '/') unary)*
//! unary          := ('-' | '+') unary | primary
//! primary        := NUMBER | IDENT | IDENT '(' expr ')' | '(' expr ')'
//! ```

use super::ast::{BinaryOp, Equation, Expr};
use super::lexer::{tokenize, Token, TokenKind};
use crate::data::functions::lookup_function;
use crate::utils::error::ParseError;

/// Parse an expression or a chain of expressions joined by `=`
///
/// Parsing, folding and rendering recurse once per nesting level (a
/// parenthesized group, function call, unary minus or chained operator), so
/// depth is bounded by the thread's stack rather than by a fixed limit.
/// Input nested tens of thousands of levels deep can overflow the stack;
/// hundreds of levels are fine.
pub fn parse(input: &str) -> Result<Equation, ParseError> {
    let mut sides = Vec::new();
    let mut base_column = 0;

    for part in input.split('=') {
        let tokens = tokenize(part, base_column)?;
        if tokens.is_empty() {
            return Err(ParseError::at("empty sub-expression", base_column + 1));
        }
        sides.push(Parser::new(&tokens, base_column + part.chars().count()).parse()?);
        // Skip the part and its '='
        base_column += part.chars().count() + 1;
    }

    Ok(Equation::new(sides))
}

/// Parse a single expression; `=` is rejected
pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
    let mut equation = parse(input)?;
    if equation.is_chain() {
        return Err(ParseError::new("expected a single expression, found '='"));
    }
    Ok(equation.sides.remove(0))
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Column just past the sub-expression, for end-of-input errors
    end_column: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], end_column: usize) -> Self {
        Parser {
            tokens,
            pos: 0,
            end_column: end_column + 1,
        }
    }

    fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_additive()?;
        match self.peek() {
            None => Ok(expr),
            Some(Token {
                kind: TokenKind::RParen,
                column,
            }) => Err(ParseError::at("unbalanced parentheses: unmatched ')'", *column)),
            Some(token) => Err(ParseError::at(
                format!("unexpected '{}'", token.kind.describe()),
                token.column,
            )),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.parse_multiplicative()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.parse_unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Minus) => {
                self.pos += 1;
                Ok(Expr::neg(self.parse_unary()?))
            }
            Some(TokenKind::Plus) => {
                self.pos += 1;
                self.parse_unary()
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let previous = self.pos.checked_sub(1).and_then(|i| self.tokens.get(i));
        let Some(token) = self.next() else {
            return Err(match previous {
                Some(prev) if prev.kind.is_operator() => ParseError::at(
                    format!("operator '{}' is missing an operand", prev.kind.describe()),
                    prev.column,
                ),
                Some(prev) if prev.kind == TokenKind::LParen => {
                    ParseError::at("unbalanced parentheses: unclosed '('", prev.column)
                }
                _ => ParseError::at("unexpected end of expression", self.end_column),
            });
        };

        match &token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(*value)),
            TokenKind::Ident(name) => {
                if matches!(self.peek().map(|t| &t.kind), Some(TokenKind::LParen)) {
                    self.parse_call(name, token.column)
                } else {
                    Ok(Expr::Ident(name.clone()))
                }
            }
            TokenKind::LParen => {
                let inner = self.parse_additive()?;
                self.expect_close(token.column)?;
                Ok(inner)
            }
            TokenKind::RParen => Err(match previous {
                Some(prev) if prev.kind.is_operator() => ParseError::at(
                    format!("operator '{}' is missing an operand", prev.kind.describe()),
                    prev.column,
                ),
                Some(prev) if prev.kind == TokenKind::LParen => {
                    ParseError::at("empty parentheses", prev.column)
                }
                _ => ParseError::at("unbalanced parentheses: unmatched ')'", token.column),
            }),
            op => Err(ParseError::at(
                format!("operator '{}' is missing an operand", op.describe()),
                token.column,
            )),
        }
    }

    fn parse_call(&mut self, name: &str, column: usize) -> Result<Expr, ParseError> {
        if lookup_function(name).is_none() {
            return Err(ParseError::at(
                format!("unrecognized function '{}'", name),
                column,
            ));
        }
        // Opening parenthesis
        let open = self.next().map_or(column, |t| t.column);
        let argument = self.parse_additive()?;
        self.expect_close(open)?;
        Ok(Expr::call(name, argument))
    }

    fn expect_close(&mut self, open_column: usize) -> Result<(), ParseError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            Some(token) => Err(ParseError::at(
                format!("expected ')', found '{}'", token.kind.describe()),
                token.column,
            )),
            None => Err(ParseError::at(
                "unbalanced parentheses: unclosed '('",
                open_column,
            )),
        }
    }
}
