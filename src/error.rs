use crate::lexer::TokenKind;
use std::num::ParseFloatError;
use thiserror::Error;

/// Broad category of an [`EvalError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    NumericConversion,
}

/// Every way an expression can fail to evaluate.
///
/// Positions are byte offsets into the evaluated text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Unknown character '{character}' at position {position}")]
    UnknownCharacter { character: char, position: usize },

    #[error("Unknown function '{name}' at position {position}")]
    UnknownIdentifier { name: String, position: usize },

    #[error("Unexpected token {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        position: usize,
    },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    #[error("Unexpected trailing {found} at position {position}")]
    TrailingInput { found: TokenKind, position: usize },

    #[error("Expression nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },

    #[error("Invalid numeric literal '{literal}' at position {position}: {source}")]
    InvalidNumber {
        literal: String,
        position: usize,
        #[source]
        source: ParseFloatError,
    },
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::UnknownCharacter { .. } | EvalError::UnknownIdentifier { .. } => {
                ErrorKind::Lexical
            }
            EvalError::UnexpectedToken { .. }
            | EvalError::UnexpectedEndOfInput { .. }
            | EvalError::TrailingInput { .. }
            | EvalError::NestingTooDeep { .. } => ErrorKind::Syntax,
            EvalError::InvalidNumber { .. } => ErrorKind::NumericConversion,
        }
    }

    /// Byte offset the error points at, if the failure is tied to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::UnknownCharacter { position, .. }
            | EvalError::UnknownIdentifier { position, .. }
            | EvalError::UnexpectedToken { position, .. }
            | EvalError::TrailingInput { position, .. }
            | EvalError::NestingTooDeep { position, .. }
            | EvalError::InvalidNumber { position, .. } => Some(*position),
            EvalError::UnexpectedEndOfInput { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let lexical = EvalError::UnknownCharacter {
            character: '$',
            position: 2,
        };
        assert_eq!(lexical.kind(), ErrorKind::Lexical);
        assert_eq!(lexical.position(), Some(2));

        let syntax = EvalError::UnexpectedEndOfInput {
            expected: "')'".to_string(),
        };
        assert_eq!(syntax.kind(), ErrorKind::Syntax);
        assert_eq!(syntax.position(), None);

        let numeric = EvalError::InvalidNumber {
            literal: "1.2.3".to_string(),
            position: 0,
            source: "1.2.3".parse::<f64>().unwrap_err(),
        };
        assert_eq!(numeric.kind(), ErrorKind::NumericConversion);
    }

    #[test]
    fn test_error_messages() {
        let err = EvalError::UnknownIdentifier {
            name: "foo".to_string(),
            position: 0,
        };
        assert_eq!(err.to_string(), "Unknown function 'foo' at position 0");

        let err = EvalError::UnexpectedToken {
            expected: "a number, '(' or a function".to_string(),
            found: TokenKind::RightParen,
            position: 4,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected token ')' at position 4, expected a number, '(' or a function"
        );
    }
}
