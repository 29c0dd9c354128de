//! Data layer - static lookup tables
//!
//! - `functions`: function names understood by the expression engine
//! - `templates`: per-format wrapping and per-mode splicing rules

pub mod functions;
pub mod templates;

pub use functions::{lookup_function, MathFunction, FUNCTIONS};
pub use templates::{FormatTemplate, Splice, DOCUMENT_BEGIN, DOCUMENT_END};
