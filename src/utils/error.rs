//! Error handling for MaTeX conversions and exports
//!
//! This module provides the error taxonomy shared by the expression engine,
//! the container renderer and the exporter, plus the crate-wide result type.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed expression text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseError {
    pub message: String,
    /// 1-based character column inside the sub-expression, when known
    pub column: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.column {
            Some(c) => write!(f, "Parse error at column {}: {}", c, self.message),
            None => write!(f, "Parse error: {}", self.message),
        }
    }
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            column: None,
        }
    }

    pub fn at(message: impl Into<String>, column: usize) -> Self {
        ParseError {
            message: message.into(),
            column: Some(column),
        }
    }
}

/// Failures of the exporter
#[derive(Debug, Error)]
pub enum ExportError {
    /// An insertion mode was requested but the target has no matching marker
    #[error("Missing anchor '{marker}' in {}", path.display())]
    MissingAnchor { marker: &'static str, path: PathBuf },
    /// Underlying read/write failure
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Conversion and export error type
#[derive(Debug, Error)]
pub enum MatexError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Malformed AST reaching the renderer
    #[error("Render error: {message}")]
    Render { message: String },
    /// Literal arithmetic without a finite result
    #[error("Evaluation error: {message}")]
    Evaluation { message: String },
    /// Zero-length vector or matrix
    #[error("Empty container: cannot render an empty {kind}")]
    EmptyContainer { kind: &'static str },
    #[error(transparent)]
    Export(#[from] ExportError),
}

// Convenience constructors for errors
impl MatexError {
    pub fn render(message: impl Into<String>) -> Self {
        MatexError::Render {
            message: message.into(),
        }
    }

    pub fn evaluation(message: impl Into<String>) -> Self {
        MatexError::Evaluation {
            message: message.into(),
        }
    }

    pub fn empty(kind: &'static str) -> Self {
        MatexError::EmptyContainer { kind }
    }
}

/// Result type for conversion operations
pub type MatexResult<T> = Result<T, MatexError>;

/// Failures while loading a configuration file
#[cfg(feature = "config-file")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("unexpected token");
        assert!(err.to_string().contains("Parse error"));
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_parse_error_with_location() {
        let msg = ParseError::at("unexpected token", 5).to_string();
        assert!(msg.contains("column 5"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: MatexError = ParseError::new("x").into();
        assert!(matches!(err, MatexError::Parse(_)));
    }

    #[test]
    fn test_missing_anchor_display() {
        let err = ExportError::MissingAnchor {
            marker: r"\begin{document}",
            path: PathBuf::from("out/doc.tex"),
        };
        let msg = err.to_string();
        assert!(msg.contains(r"\begin{document}"));
        assert!(msg.contains("doc.tex"));
    }

    #[test]
    fn test_empty_container_display() {
        assert!(MatexError::empty("vector").to_string().contains("vector"));
    }
}
