//! Constant folding of fully-literal subtrees

use super::ast::{BinaryOp, Equation, Expr, UnaryOp};
use crate::data::functions::lookup_function;
use crate::utils::error::{MatexError, MatexResult};

/// Fold each side of an equation independently
pub fn fold_equation(equation: Equation) -> MatexResult<Equation> {
    let sides = equation
        .sides
        .into_iter()
        .map(fold)
        .collect::<MatexResult<Vec<_>>>()?;
    Ok(Equation::new(sides))
}

/// Replace every subtree whose leaves are all literals by its value
///
/// Subtrees containing an identifier keep their shape; only their literal
/// children are folded.
pub fn fold(expr: Expr) -> MatexResult<Expr> {
    match expr {
        Expr::Number(value) => literal(value, "number literal"),
        Expr::Ident(_) => Ok(expr),
        Expr::Unary(UnaryOp::Neg, operand) => match fold(*operand)? {
            Expr::Number(value) => literal(-value, "negation"),
            operand => Ok(Expr::neg(operand)),
        },
        Expr::Binary(op, lhs, rhs) => match (fold(*lhs)?, fold(*rhs)?) {
            (Expr::Number(a), Expr::Number(b)) => {
                if op == BinaryOp::Div && b == 0.0 {
                    return Err(MatexError::evaluation(format!(
                        "division by zero in {}/{}",
                        a, b
                    )));
                }
                literal(op.apply(a, b), op.latex())
            }
            (lhs, rhs) => Ok(Expr::binary(op, lhs, rhs)),
        },
        Expr::Call(name, args) => {
            let args = args.into_iter().map(fold).collect::<MatexResult<Vec<_>>>()?;
            match (lookup_function(&name), args.as_slice()) {
                (Some(function), [Expr::Number(x)]) => {
                    let value = function.apply(*x);
                    if !value.is_finite() {
                        return Err(MatexError::evaluation(format!(
                            "{}({}) has no finite value",
                            name, x
                        )));
                    }
                    literal(value, &name)
                }
                _ => Ok(Expr::Call(name, args)),
            }
        }
    }
}

fn literal(value: f64, what: &str) -> MatexResult<Expr> {
    if !value.is_finite() {
        return Err(MatexError::evaluation(format!(
            "{} does not produce a finite value",
            what
        )));
    }
    // Normalize -0 so it renders as 0
    Ok(Expr::Number(if value == 0.0 { 0.0 } else { value }))
}
