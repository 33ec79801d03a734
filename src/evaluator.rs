use crate::ast::Expr;
use crate::config::EvaluatorConfig;
use crate::error::EvalError;
use crate::parser::{Arithmetic, Parser, TreeBuilder};
use log::debug;
use rayon::prelude::*;

/// Evaluates expressions with a fixed [`EvaluatorConfig`].
///
/// Holds no per-expression state, so one instance can be shared across threads.
#[derive(Debug, Default, Clone)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Parses and evaluates in a single pass, without building a tree.
    pub fn evaluate_expression(&self, expression: &str) -> Result<f64, EvalError> {
        debug!("Evaluating expression: {}", expression);
        let result = Parser::new(expression, Arithmetic, self.config)?.parse();
        debug!("Evaluation result: {:?}", result);
        result
    }

    /// Parse an expression string into an [`Expr`] tree.
    pub fn parse_expression(&self, expression: &str) -> Result<Expr, EvalError> {
        debug!("Parsing expression: {}", expression);
        let ast = Parser::new(expression, TreeBuilder, self.config)?.parse()?;
        debug!("Parse result: {:#?}", ast);
        Ok(ast)
    }

    /// Evaluate a pre-parsed tree.
    pub fn evaluate_ast(&self, ast: &Expr) -> f64 {
        ast.evaluate()
    }

    /// Evaluates independent expressions in parallel. Results keep the input order.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64, EvalError>>
    where
        S: AsRef<str> + Sync,
    {
        debug!("Evaluating batch of {} expressions", expressions.len());
        expressions
            .par_iter()
            .map(|expression| self.evaluate_expression(expression.as_ref()))
            .collect()
    }
}
