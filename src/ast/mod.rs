mod evaluator;

use crate::functions::Function;
use std::fmt;

/// Expression tree built by [`crate::parse`].
///
/// Evaluating it gives the same value the fused evaluator computes while parsing.
/// Runs of operators with the same precedence are stored flat in a [`Expr::Chain`],
/// so the height of the tree only grows with parentheses and function calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(f64),
    /// `first op e op e ...`, applied left to right. Every operator in `rest`
    /// has the same precedence and `rest` is never empty.
    Chain {
        first: Box<Expr>,
        rest: Vec<(Operator, Expr)>,
    },
    Call {
        function: Function,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Appends `operator right` to `left`.
    ///
    /// Extends `left` in place when it already is a chain of the same precedence.
    pub fn binary(left: Expr, operator: Operator, right: Expr) -> Self {
        match left {
            Expr::Chain { first, mut rest } if continues_chain(&rest, operator) => {
                rest.push((operator, right));
                Expr::Chain { first, rest }
            }
            left => Expr::Chain {
                first: Box::new(left),
                rest: vec![(operator, right)],
            },
        }
    }

    pub fn call(function: Function, args: Vec<Expr>) -> Self {
        Expr::Call { function, args }
    }

    /// Height of the tree; a lone literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Chain { first, rest } => {
                1 + rest
                    .iter()
                    .map(|(_, operand)| operand.depth())
                    .fold(first.depth(), usize::max)
            }
            Expr::Call { args, .. } => 1 + args.iter().map(Expr::depth).max().unwrap_or(0),
        }
    }
}

fn continues_chain(rest: &[(Operator, Expr)], operator: Operator) -> bool {
    rest.first().is_some_and(|(op, _)| op.precedence() == operator.precedence())
}

/// Fully parenthesized form that parses back to an equal tree.
///
/// Literals that overflowed to infinity print as `inf`, which is not valid
/// input, so trees holding them do not round-trip.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Chain { first, rest } => {
                write!(f, "({}", first)?;
                for (operator, operand) in rest {
                    write!(f, " {} {}", operator, operand)?;
                }
                write!(f, ")")
            }
            Expr::Call { function, args } => {
                write!(f, "{}(", function)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// IEEE-754 arithmetic; division by zero yields `inf`/`NaN` instead of failing.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }

    /// Binding strength; `*` and `/` bind tighter than `+` and `-`.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(3.0, 5.0), 8.0);
        assert_eq!(Operator::Subtract.apply(3.0, 5.0), -2.0);
        assert_eq!(Operator::Multiply.apply(3.0, 5.0), 15.0);
        assert_eq!(Operator::Divide.apply(10.0, 4.0), 2.5);
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        assert_eq!(Operator::Divide.apply(2.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-2.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_display_is_fully_parenthesized() {
        let expr = Expr::binary(
            Expr::Literal(3.0),
            Operator::Add,
            Expr::binary(
                Expr::binary(Expr::Literal(5.0), Operator::Multiply, Expr::Literal(10.0)),
                Operator::Divide,
                Expr::Literal(2.0),
            ),
        );
        assert_eq!(expr.to_string(), "(3 + (5 * 10 / 2))");

        let call = Expr::call(Function::Pow, vec![Expr::Literal(2.0), Expr::Literal(0.5)]);
        assert_eq!(call.to_string(), "pow(2, 0.5)");
    }

    #[test]
    fn test_display_of_overflowed_literal() {
        assert_eq!(Expr::Literal(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn test_binary_extends_same_precedence_chain() {
        let chain = Expr::binary(
            Expr::binary(Expr::Literal(1.0), Operator::Add, Expr::Literal(2.0)),
            Operator::Subtract,
            Expr::Literal(3.0),
        );
        assert_eq!(
            chain,
            Expr::Chain {
                first: Box::new(Expr::Literal(1.0)),
                rest: vec![
                    (Operator::Add, Expr::Literal(2.0)),
                    (Operator::Subtract, Expr::Literal(3.0)),
                ],
            }
        );
        assert_eq!(chain.depth(), 2);
    }

    #[test]
    fn test_binary_nests_different_precedence() {
        let expr = Expr::binary(
            Expr::binary(Expr::Literal(1.0), Operator::Add, Expr::Literal(2.0)),
            Operator::Multiply,
            Expr::Literal(3.0),
        );
        assert_eq!(expr.to_string(), "((1 + 2) * 3)");
        assert_eq!(expr.depth(), 3);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Expr::Literal(1.0).depth(), 1);
        let expr = Expr::call(
            Function::Abs,
            vec![Expr::binary(
                Expr::Literal(1.0),
                Operator::Subtract,
                Expr::Literal(2.0),
            )],
        );
        assert_eq!(expr.depth(), 3);
    }
}
