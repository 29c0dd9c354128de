//! Feature modules
//!
//! - `export`: writing rendered LaTeX into plain, Markdown and LaTeX files

pub mod export;

// Re-export commonly used types
pub use export::{export, export_with, ExportOptions, TextFormat, WriteMode};
