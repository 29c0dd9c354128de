//! Container Renderer
//!
//! Renders dense vectors as `pmatrix` and dense matrices as `bmatrix`.
//! Rectangularity of matrices is the caller's invariant and is not checked.

use crate::core::expression::format_number;
use crate::utils::error::{MatexError, MatexResult};

/// Column separator inside a row
const COLUMN_SEPARATOR: &str = "&";
/// Row separator
const ROW_SEPARATOR: &str = r"\\";

/// Render a column vector
///
/// Compact output is `\begin{pmatrix}1\\2\\3\end{pmatrix}`; pretty output
/// puts each element on its own line.
pub fn vector_to_latex(values: &[f64], pretty: bool) -> MatexResult<String> {
    if values.is_empty() {
        return Err(MatexError::empty("vector"));
    }
    let rows = values
        .iter()
        .map(|v| cell(*v).map(|text| vec![text]))
        .collect::<MatexResult<Vec<_>>>()?;
    Ok(environment("pmatrix", &rows, pretty))
}

/// Render a row-major matrix
pub fn matrix_to_latex(rows: &[Vec<f64>], pretty: bool) -> MatexResult<String> {
    if rows.first().map_or(true, |row| row.is_empty()) {
        return Err(MatexError::empty("matrix"));
    }
    let cells = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| cell(*v))
                .collect::<MatexResult<Vec<_>>>()
        })
        .collect::<MatexResult<Vec<_>>>()?;
    Ok(environment("bmatrix", &cells, pretty))
}

fn cell(value: f64) -> MatexResult<String> {
    if !value.is_finite() {
        return Err(MatexError::evaluation(format!(
            "container element {} is not finite",
            value
        )));
    }
    format_number(value)
}

fn environment(name: &str, rows: &[Vec<String>], pretty: bool) -> String {
    let mut out = format!("\\begin{{{}}}", name);
    let last = rows.len() - 1;

    for (i, row) in rows.iter().enumerate() {
        if pretty {
            out.push('\n');
            out.push_str(&row.join(&format!(" {} ", COLUMN_SEPARATOR)));
            // Every pretty row ends in a space, followed by `\\` unless last
            out.push(' ');
            if i != last {
                out.push_str(ROW_SEPARATOR);
            }
        } else {
            out.push_str(&row.join(COLUMN_SEPARATOR));
            if i != last {
                out.push_str(ROW_SEPARATOR);
            }
        }
    }

    if pretty {
        out.push('\n');
    }
    out.push_str(&format!("\\end{{{}}}", name));
    out
}
