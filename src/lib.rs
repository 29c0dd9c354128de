//! # matex
//!
//! Convert mathematical objects to LaTeX and export them into documents.
//!
//! ## Features
//!
//! - **Expressions**: parse `+ - * /`, parentheses, identifiers and function
//!   calls such as `sqrt(x)`, fold literal arithmetic, render LaTeX
//! - **Equation chains**: `f=0=3*3+sqrt(a)` renders each side independently
//! - **Vectors and matrices**: `pmatrix` / `bmatrix` environments
//! - **Pretty printing**: optional whitespace and newlines in the output
//! - **Document export**: override a file or insert next to
//!   `\begin{document}` / `\end{document}`
//!
//! ## Usage Examples
//!
//! ### Conversion
//!
//! ```rust
//! use matex::{math_to_latex, Config, ConvertibleValue};
//!
//! let config = Config::pretty();
//! let latex = math_to_latex(&"3*3+sqrt(sqrt(a))".into(), &config).unwrap();
//! assert_eq!(latex, r"9 + \sqrt{\sqrt{a}}");
//!
//! let vector = ConvertibleValue::Vector(vec![1.0, 2.0, 3.0]);
//! let latex = math_to_latex(&vector, &Config::default()).unwrap();
//! assert_eq!(latex, r"\begin{pmatrix}1\\2\\3\end{pmatrix}");
//! ```
//!
//! ### Export
//!
//! ```rust,no_run
//! use matex::{export, math_to_latex, Config, ExportOptions};
//!
//! let config = Config::default().with_save_location("out");
//! let latex = math_to_latex(&"x=2*3".into(), &config).unwrap();
//! export(&latex, "result.tex", &ExportOptions::document(), &config).unwrap();
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static lookup tables
pub mod data;

/// Feature modules - export
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core conversion functions
pub use crate::core::context::{pretty_print, BracketSet, Config};
pub use crate::core::expression::{
    expression_to_latex, fold, fold_equation, parse, render, Equation, Expr,
};
pub use crate::core::{math_to_latex, matrix_to_latex, vector_to_latex, ConvertibleValue};

// Re-export feature modules
pub use crate::features::export;
pub use crate::features::export::{export_with, ExportOptions, TextFormat, WriteMode};

// Re-export utilities
pub use crate::utils::error::{ExportError, MatexError, MatexResult, ParseError};
