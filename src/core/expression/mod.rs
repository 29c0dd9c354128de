//! Expression Engine
//!
//! Turns scalar expressions and equation chains into LaTeX.
//!
//! # Architecture
//!
//! ```text
//! text -> split on '=' -> tokens -> AST per side -> constant folding -> LaTeX
//! ```
//!
//! # Example
//!
//! ```rust
//! use matex::core::expression::expression_to_latex;
//! use matex::Config;
//!
//! let latex = expression_to_latex("f=0=3*3+sqrt(sqrt(a))", &Config::pretty()).unwrap();
//! assert_eq!(latex, r"f = 0 = 9 + \sqrt{\sqrt{a}}");
//! ```

mod ast;
mod fold;
mod lexer;
mod parser;
mod render;

#[cfg(test)]
mod tests;

// Re-export public API
pub use ast::{BinaryOp, Equation, Expr, UnaryOp};
pub use fold::{fold, fold_equation};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, parse_expression};
pub use render::{format_number, render, render_expr};

use crate::core::context::Config;
use crate::utils::error::MatexResult;

/// Parse, fold and render `input` with the config's pretty-printing flag
pub fn expression_to_latex(input: &str, config: &Config) -> MatexResult<String> {
    let equation = fold_equation(parse(input)?)?;
    render(&equation, config.pretty_printing)
}
