//! Expression tree

/// Prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

/// Infix arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Binding strength of additive operators
pub const PREC_ADDITIVE: u8 = 1;
/// Binding strength of multiplicative operators
pub const PREC_MULTIPLICATIVE: u8 = 2;
/// Binding strength of unary minus (and negative literals)
pub const PREC_UNARY: u8 = 3;
/// Atoms never need parentheses
pub const PREC_ATOM: u8 = 4;

impl BinaryOp {
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => PREC_ADDITIVE,
            BinaryOp::Mul | BinaryOp::Div => PREC_MULTIPLICATIVE,
        }
    }

    /// Whether `a op (b op c)` differs from `(a op b) op c`
    pub fn is_left_only(self) -> bool {
        matches!(self, BinaryOp::Sub | BinaryOp::Div)
    }

    /// LaTeX token for the operator
    pub fn latex(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => r"\cdot",
            BinaryOp::Div => "/",
        }
    }

    /// Evaluate on literal operands
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
        }
    }
}

/// Expression AST node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Ident(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// Function application; input parsing always yields exactly one argument
    Call(String, Vec<Expr>),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn neg(operand: Expr) -> Self {
        Expr::Unary(UnaryOp::Neg, Box::new(operand))
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn call(name: impl Into<String>, argument: Expr) -> Self {
        Expr::Call(name.into(), vec![argument])
    }

    /// Precedence of the node as it will be rendered
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Number(v) if v.is_sign_negative() && *v != 0.0 => PREC_UNARY,
            Expr::Unary(..) => PREC_UNARY,
            Expr::Binary(op, ..) => op.precedence(),
            Expr::Number(_) | Expr::Ident(_) | Expr::Call(..) => PREC_ATOM,
        }
    }
}

/// Chain of expressions joined by `=`
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub sides: Vec<Expr>,
}

impl Equation {
    pub fn new(sides: Vec<Expr>) -> Self {
        Equation { sides }
    }

    /// A single side means a plain expression
    pub fn is_chain(&self) -> bool {
        self.sides.len() > 1
    }
}

impl From<Expr> for Equation {
    fn from(expr: Expr) -> Self {
        Equation { sides: vec![expr] }
    }
}
