//! LaTeX rendering of expression trees

use super::ast::{BinaryOp, Equation, Expr, UnaryOp, PREC_UNARY};
use crate::utils::error::{MatexError, MatexResult};

/// Render an equation chain, joining sides with `=`
pub fn render(equation: &Equation, pretty: bool) -> MatexResult<String> {
    if equation.sides.is_empty() {
        return Err(MatexError::render("equation has no sides"));
    }
    let sides = equation
        .sides
        .iter()
        .map(|side| render_expr(side, pretty))
        .collect::<MatexResult<Vec<_>>>()?;
    Ok(sides.join(if pretty { " = " } else { "=" }))
}

/// Render a single expression
pub fn render_expr(expr: &Expr, pretty: bool) -> MatexResult<String> {
    match expr {
        Expr::Number(value) => format_number(*value),
        Expr::Ident(name) => {
            if name.is_empty() {
                return Err(MatexError::render("empty identifier"));
            }
            Ok(name.clone())
        }
        Expr::Unary(UnaryOp::Neg, operand) => {
            let inner = render_expr(operand, pretty)?;
            // Parenthesize anything that is not an atom to avoid `--a` and `-a+b`
            if operand.precedence() <= PREC_UNARY {
                Ok(format!("-({})", inner))
            } else {
                Ok(format!("-{}", inner))
            }
        }
        Expr::Binary(op, lhs, rhs) => render_binary(*op, lhs, rhs, pretty),
        Expr::Call(name, args) => {
            if name.is_empty() {
                return Err(MatexError::render("function call without a name"));
            }
            let [argument] = args.as_slice() else {
                return Err(MatexError::render(format!(
                    "function '{}' expects exactly one argument, got {}",
                    name,
                    args.len()
                )));
            };
            Ok(format!("\\{}{{{}}}", name, render_expr(argument, pretty)?))
        }
    }
}

fn render_binary(op: BinaryOp, lhs: &Expr, rhs: &Expr, pretty: bool) -> MatexResult<String> {
    let prec = op.precedence();

    let mut left = render_expr(lhs, pretty)?;
    if lhs.precedence() < prec {
        left = format!("({})", left);
    }

    let mut right = render_expr(rhs, pretty)?;
    let rhs_prec = rhs.precedence();
    if rhs_prec < prec || (rhs_prec == prec && op.is_left_only()) || rhs_prec == PREC_UNARY {
        right = format!("({})", right);
    }

    let symbol = op.latex();
    if pretty {
        return Ok(format!("{} {} {}", left, symbol, right));
    }
    // A control word must not run into a following letter
    let runs_on = right.starts_with(|c: char| c.is_ascii_alphabetic());
    let separator = if symbol.starts_with('\\') && runs_on { "{}" } else { "" };
    Ok(format!("{}{}{}{}", left, symbol, separator, right))
}

/// Minimal decimal text for a finite number
///
/// `9.0` renders as `9`, `0.5` as `0.5`; negative zero renders as `0`.
pub fn format_number(value: f64) -> MatexResult<String> {
    if !value.is_finite() {
        return Err(MatexError::render(format!(
            "cannot render non-finite number {}",
            value
        )));
    }
    if value == 0.0 {
        return Ok("0".to_string());
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(9.0).unwrap(), "9");
        assert_eq!(format_number(0.5).unwrap(), "0.5");
        assert_eq!(format_number(-3.25).unwrap(), "-3.25");
        assert_eq!(format_number(-0.0).unwrap(), "0");
        assert_eq!(format_number(1e21).unwrap(), "1000000000000000000000");
        assert!(format_number(f64::NAN).is_err());
        assert!(format_number(f64::INFINITY).is_err());
    }

    #[test]
    fn test_render_call_arity() {
        let bad = Expr::Call("sqrt".into(), vec![]);
        assert!(matches!(
            render_expr(&bad, false),
            Err(MatexError::Render { .. })
        ));
        let two = Expr::Call("sqrt".into(), vec![Expr::ident("a"), Expr::ident("b")]);
        assert!(render_expr(&two, false).is_err());
    }

    #[test]
    fn test_render_empty_equation() {
        assert!(render(&Equation::new(vec![]), true).is_err());
    }

    #[test]
    fn test_render_cdot_terminator() {
        let expr = Expr::binary(BinaryOp::Mul, Expr::ident("a"), Expr::ident("b"));
        assert_eq!(render_expr(&expr, false).unwrap(), r"a\cdot{}b");
        assert_eq!(render_expr(&expr, true).unwrap(), r"a \cdot b");

        let expr = Expr::binary(BinaryOp::Mul, Expr::ident("a"), Expr::Number(2.0));
        assert_eq!(render_expr(&expr, false).unwrap(), r"a\cdot2");
    }

    #[test]
    fn test_render_generic_function() {
        let expr = Expr::call("sin", Expr::ident("x"));
        assert_eq!(render_expr(&expr, false).unwrap(), r"\sin{x}");
        let expr = Expr::call("foo", Expr::ident("x"));
        assert_eq!(render_expr(&expr, false).unwrap(), r"\foo{x}");
    }
}
