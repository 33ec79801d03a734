pub mod ast;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, Operator};
pub use config::EvaluatorConfig;
pub use error::{ErrorKind, EvalError};
pub use evaluator::Evaluator;
pub use functions::Function;
pub use lexer::{tokenize, Lexer, Token, TokenKind};

/// Evaluates an arithmetic expression such as `3 + pow(2, 3) * 2`.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_with(expression, EvaluatorConfig::default())
}

pub fn evaluate_with(expression: &str, config: EvaluatorConfig) -> Result<f64, EvalError> {
    Evaluator::with_config(config).evaluate_expression(expression)
}

/// Parses an expression into a tree without evaluating it.
pub fn parse(expression: &str) -> Result<Expr, EvalError> {
    parse_with(expression, EvaluatorConfig::default())
}

pub fn parse_with(expression: &str, config: EvaluatorConfig) -> Result<Expr, EvalError> {
    Evaluator::with_config(config).parse_expression(expression)
}

/// Evaluates many expressions in parallel, one result per input, in input order.
pub fn evaluate_batch<S>(expressions: &[S]) -> Vec<Result<f64, EvalError>>
where
    S: AsRef<str> + Sync,
{
    Evaluator::new().evaluate_batch(expressions)
}
