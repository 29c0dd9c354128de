//! Known function names for expression parsing and constant folding

use phf::phf_map;

/// Unary functions recognized in expression input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Exp,
}

impl MathFunction {
    /// Evaluate on a literal argument
    pub fn apply(self, x: f64) -> f64 {
        match self {
            MathFunction::Sqrt => x.sqrt(),
            MathFunction::Sin => x.sin(),
            MathFunction::Cos => x.cos(),
            MathFunction::Tan => x.tan(),
            MathFunction::Ln => x.ln(),
            MathFunction::Log => x.log10(),
            MathFunction::Exp => x.exp(),
        }
    }
}

/// Function name -> function
pub static FUNCTIONS: phf::Map<&'static str, MathFunction> = phf_map! {
    "sqrt" => MathFunction::Sqrt,
    "sin" => MathFunction::Sin,
    "cos" => MathFunction::Cos,
    "tan" => MathFunction::Tan,
    "ln" => MathFunction::Ln,
    "log" => MathFunction::Log,
    "exp" => MathFunction::Exp,
};

/// Look up a function by its input name
pub fn lookup_function(name: &str) -> Option<MathFunction> {
    FUNCTIONS.get(name).copied()
}
