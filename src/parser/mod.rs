mod semantics;

pub use semantics::{Arithmetic, Semantics, TreeBuilder};

use crate::ast::Operator;
use crate::config::EvaluatorConfig;
use crate::error::EvalError;
use crate::functions::Function;
use crate::lexer::{Lexer, Token, TokenKind};
use log::debug;

const FACTOR_START: &str = "a number, '(' or a function";

/// Recursive-descent parser with a single token of lookahead.
///
/// Grammar:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := NUMBER
///             | '(' expression ')'
///             | ('pow' | 'min' | 'max') '(' expression ',' expression ')'
///             | 'abs' '(' expression ')'
/// ```
pub struct Parser<'a, S> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    semantics: S,
    config: EvaluatorConfig,
    depth: usize,
}

impl<'a, S: Semantics> Parser<'a, S> {
    /// Creates a parser and reads the first token into the lookahead.
    pub fn new(input: &'a str, semantics: S, config: EvaluatorConfig) -> Result<Self, EvalError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            semantics,
            config,
            depth: 0,
        })
    }

    /// Parses one complete expression.
    ///
    /// Unless trailing input is allowed, the expression must be followed by
    /// the end of input.
    pub fn parse(mut self) -> Result<S::Value, EvalError> {
        let value = self.expression()?;

        if !self.current.is_end() {
            if self.config.allows_trailing_input() {
                debug!(
                    "Ignoring trailing input starting at {}",
                    self.current.position
                );
            } else {
                return Err(EvalError::TrailingInput {
                    found: self.current.kind,
                    position: self.current.position,
                });
            }
        }

        Ok(value)
    }

    /// Moves the lookahead forward and returns the token it held.
    fn advance(&mut self) -> Result<Token<'a>, EvalError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, EvalError> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    fn unexpected(&self, expected: impl Into<String>) -> EvalError {
        let expected = expected.into();
        if self.current.is_end() {
            EvalError::UnexpectedEndOfInput { expected }
        } else {
            EvalError::UnexpectedToken {
                expected,
                found: self.current.kind,
                position: self.current.position,
            }
        }
    }

    fn enter(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > self.config.get_max_depth() {
            return Err(EvalError::NestingTooDeep {
                limit: self.config.get_max_depth(),
                position: self.current.position,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expression(&mut self) -> Result<S::Value, EvalError> {
        let mut value = self.term()?;

        while let Some(operator @ (Operator::Add | Operator::Subtract)) =
            self.current.kind.as_operator()
        {
            self.advance()?;
            let right = self.term()?;
            value = self.semantics.binary(operator, value, right);
        }

        Ok(value)
    }

    fn term(&mut self) -> Result<S::Value, EvalError> {
        let mut value = self.factor()?;

        while let Some(operator @ (Operator::Multiply | Operator::Divide)) =
            self.current.kind.as_operator()
        {
            self.advance()?;
            let right = self.factor()?;
            value = self.semantics.binary(operator, value, right);
        }

        Ok(value)
    }

    fn factor(&mut self) -> Result<S::Value, EvalError> {
        match self.current.kind {
            TokenKind::Number => {
                let value = parse_number(&self.current)?;
                self.advance()?;
                Ok(self.semantics.number(value))
            }
            TokenKind::LeftParen => {
                self.enter()?;
                self.advance()?;
                let value = self.expression()?;
                self.expect(TokenKind::RightParen)?;
                self.leave();
                Ok(value)
            }
            kind => match kind.as_function() {
                Some(function) => self.call(function),
                None => Err(self.unexpected(FACTOR_START)),
            },
        }
    }

    fn call(&mut self, function: Function) -> Result<S::Value, EvalError> {
        self.enter()?;
        self.advance()?;
        self.expect(TokenKind::LeftParen)?;

        let mut args = Vec::with_capacity(function.arity());
        for i in 0..function.arity() {
            if i > 0 {
                self.expect(TokenKind::Comma)?;
            }
            args.push(self.expression()?);
        }

        self.expect(TokenKind::RightParen)?;
        self.leave();
        Ok(self.semantics.call(function, args))
    }
}

fn parse_number(token: &Token<'_>) -> Result<f64, EvalError> {
    let literal = token.literal.unwrap_or_default();
    literal
        .parse::<f64>()
        .map_err(|source| EvalError::InvalidNumber {
            literal: literal.to_string(),
            position: token.position,
            source,
        })
}
