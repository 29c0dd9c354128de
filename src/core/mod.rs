//! Core conversion modules
//!
//! This module contains the conversion engines:
//! - `expression`: scalar expressions and equation chains
//! - `container`: dense vectors and matrices
//! - `context`: the `Config` every call reads

pub mod container;
pub mod context;
pub mod expression;

pub use container::{matrix_to_latex, vector_to_latex};
pub use context::{pretty_print, BracketSet, Config};
pub use expression::{expression_to_latex, Equation, Expr};

use crate::utils::error::MatexResult;

/// Any value that can be converted to LaTeX
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertibleValue {
    /// Expression or equation chain as text
    Scalar(String),
    /// Dense column vector
    Vector(Vec<f64>),
    /// Dense row-major matrix
    Matrix(Vec<Vec<f64>>),
}

impl From<&str> for ConvertibleValue {
    fn from(text: &str) -> Self {
        ConvertibleValue::Scalar(text.to_string())
    }
}

impl From<String> for ConvertibleValue {
    fn from(text: String) -> Self {
        ConvertibleValue::Scalar(text)
    }
}

impl From<Vec<f64>> for ConvertibleValue {
    fn from(values: Vec<f64>) -> Self {
        ConvertibleValue::Vector(values)
    }
}

impl From<Vec<Vec<f64>>> for ConvertibleValue {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        ConvertibleValue::Matrix(rows)
    }
}

/// Convert any supported value to LaTeX
pub fn math_to_latex(value: &ConvertibleValue, config: &Config) -> MatexResult<String> {
    match value {
        ConvertibleValue::Scalar(text) => expression_to_latex(text, config),
        ConvertibleValue::Vector(values) => vector_to_latex(values, config.pretty_printing),
        ConvertibleValue::Matrix(rows) => matrix_to_latex(rows, config.pretty_printing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let config = Config::default();
        assert_eq!(math_to_latex(&"1+1".into(), &config).unwrap(), "2");
        assert_eq!(
            math_to_latex(&vec![1.0, 2.0].into(), &config).unwrap(),
            r"\begin{pmatrix}1\\2\end{pmatrix}"
        );
        assert_eq!(
            math_to_latex(&vec![vec![1.0, 2.0]].into(), &config).unwrap(),
            r"\begin{bmatrix}1&2\end{bmatrix}"
        );
    }

    #[test]
    fn test_config_read_per_call() {
        let value: ConvertibleValue = "a+b".into();
        let mut config = Config::default();
        assert_eq!(math_to_latex(&value, &config).unwrap(), "a+b");
        config.pretty_printing = true;
        assert_eq!(math_to_latex(&value, &config).unwrap(), "a + b");
    }
}
