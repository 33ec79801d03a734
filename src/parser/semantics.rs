use crate::ast::{Expr, Operator};
use crate::functions::Function;

/// What each grammar production produces.
///
/// The parser calls these as soon as a production is recognized, so an
/// implementation that returns plain numbers evaluates while parsing.
pub trait Semantics {
    type Value;

    fn number(&mut self, value: f64) -> Self::Value;

    fn binary(&mut self, operator: Operator, left: Self::Value, right: Self::Value)
        -> Self::Value;

    /// `args.len()` always equals `function.arity()`.
    fn call(&mut self, function: Function, args: Vec<Self::Value>) -> Self::Value;
}

/// Computes the value inline; no tree is ever built.
#[derive(Debug, Default, Copy, Clone)]
pub struct Arithmetic;

impl Semantics for Arithmetic {
    type Value = f64;

    fn number(&mut self, value: f64) -> f64 {
        value
    }

    fn binary(&mut self, operator: Operator, left: f64, right: f64) -> f64 {
        operator.apply(left, right)
    }

    fn call(&mut self, function: Function, args: Vec<f64>) -> f64 {
        function.apply(&args)
    }
}

/// Builds an [`Expr`] for later evaluation or printing.
#[derive(Debug, Default, Copy, Clone)]
pub struct TreeBuilder;

impl Semantics for TreeBuilder {
    type Value = Expr;

    fn number(&mut self, value: f64) -> Expr {
        Expr::Literal(value)
    }

    fn binary(&mut self, operator: Operator, left: Expr, right: Expr) -> Expr {
        Expr::binary(left, operator, right)
    }

    fn call(&mut self, function: Function, args: Vec<Expr>) -> Expr {
        Expr::call(function, args)
    }
}
