use crate::ast::Expr;

impl Expr {
    /// Evaluates the tree. Cannot fail: every error is caught while parsing.
    pub fn evaluate(&self) -> f64 {
        match self {
            Expr::Literal(value) => *value,
            Expr::Chain { first, rest } => rest
                .iter()
                .fold(first.evaluate(), |acc, (operator, operand)| {
                    operator.apply(acc, operand.evaluate())
                }),
            Expr::Call { function, args } => {
                let values: Vec<f64> = args.iter().map(Expr::evaluate).collect();
                function.apply(&values)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Expr, Operator};
    use crate::functions::Function;

    #[test]
    fn test_literal() {
        assert_eq!(Expr::Literal(4.5).evaluate(), 4.5);
    }

    #[test]
    fn test_direct_binary_operation() {
        // 3 + 5.5 * (10 + 2)
        let ast = Expr::binary(
            Expr::Literal(3.0),
            Operator::Add,
            Expr::binary(
                Expr::Literal(5.5),
                Operator::Multiply,
                Expr::binary(Expr::Literal(10.0), Operator::Add, Expr::Literal(2.0)),
            ),
        );
        assert_eq!(ast.evaluate(), 69.0);
    }

    #[test]
    fn test_nested_calls() {
        // max(pow(2, 3), abs(min(1, 2)))
        let ast = Expr::call(
            Function::Max,
            vec![
                Expr::call(Function::Pow, vec![Expr::Literal(2.0), Expr::Literal(3.0)]),
                Expr::call(
                    Function::Abs,
                    vec![Expr::call(
                        Function::Min,
                        vec![Expr::Literal(1.0), Expr::Literal(2.0)],
                    )],
                ),
            ],
        );
        assert_eq!(ast.evaluate(), 8.0);
    }

    #[test]
    fn test_long_chain_applies_left_to_right() {
        let mut ast = Expr::Literal(100.0);
        for _ in 0..50_000 {
            ast = Expr::binary(ast, Operator::Subtract, Expr::Literal(1.0));
        }
        assert_eq!(ast.depth(), 2);
        assert_eq!(ast.evaluate(), -49_900.0);
    }

    #[test]
    fn test_nan_flows_through_calls() {
        let nan = Expr::binary(Expr::Literal(0.0), Operator::Divide, Expr::Literal(0.0));
        let ast = Expr::call(Function::Min, vec![nan, Expr::Literal(1.0)]);
        assert!(ast.evaluate().is_nan());
    }
}
