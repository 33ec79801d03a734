pub mod math;

use std::fmt;

/// Built-in functions callable as `name(arg, ...)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Pow,
    Abs,
    Min,
    Max,
}

impl Function {
    /// Case-sensitive lookup of a function name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pow" => Some(Function::Pow),
            "abs" => Some(Function::Abs),
            "min" => Some(Function::Min),
            "max" => Some(Function::Max),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Pow => "pow",
            Function::Abs => "abs",
            Function::Min => "min",
            Function::Max => "max",
        }
    }

    /// Number of comma-separated arguments the function takes.
    pub fn arity(&self) -> usize {
        match self {
            Function::Abs => 1,
            Function::Pow | Function::Min | Function::Max => 2,
        }
    }

    /// Applies the function to already evaluated arguments.
    ///
    /// The parser guarantees `args.len() == self.arity()`; anything else is a
    /// caller bug and yields NaN rather than a panic.
    pub fn apply(&self, args: &[f64]) -> f64 {
        match (self, args) {
            (Function::Pow, [base, exponent]) => math::pow(*base, *exponent),
            (Function::Abs, [value]) => math::abs(*value),
            (Function::Min, [a, b]) => math::min(*a, *b),
            (Function::Max, [a, b]) => math::max(*a, *b),
            _ => f64::NAN,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
