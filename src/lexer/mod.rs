mod token;

pub use token::{Token, TokenKind};

use crate::error::EvalError;
use crate::functions::Function;
use log::trace;

/// Pull-based tokenizer over a borrowed expression.
///
/// `current` is `None` exactly when `position == input.len()`.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    current: Option<char>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            current: input.chars().next(),
            failed: false,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    fn advance(&mut self) {
        if let Some(current) = self.current {
            self.position += current.len_utf8();
            self.current = self.input[self.position..].chars().next();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let input = self.input;
        let start = self.position;
        while let Some(current) = self.current {
            if !predicate(current) {
                break;
            }
            self.advance();
        }
        &input[start..self.position]
    }

    /// Returns the next token, or `EndOfInput` forever once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'a>, EvalError> {
        self.skip_whitespace();
        let start = self.position;

        let Some(current) = self.current else {
            trace!("End of input at {}", start);
            return Ok(Token::new(TokenKind::EndOfInput, start));
        };

        let token = if is_number_char(current) {
            // "1.2.3" is accepted here and rejected when the literal is converted.
            Token::number(self.consume_while(is_number_char), start)
        } else if current.is_alphabetic() {
            let name = self.consume_while(char::is_alphabetic);
            let function =
                Function::from_name(name).ok_or_else(|| EvalError::UnknownIdentifier {
                    name: name.to_string(),
                    position: start,
                })?;
            Token::new(function.into(), start)
        } else {
            let kind = TokenKind::from_symbol(current).ok_or(EvalError::UnknownCharacter {
                character: current,
                position: start,
            })?;
            self.advance();
            Token::new(kind, start)
        };

        trace!("Token: {:?}", token);
        Ok(token)
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Yields tokens up to, but not including, `EndOfInput`. Stops after the first error.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_end() => None,
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Collects every token of `input`, excluding the final `EndOfInput`.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, EvalError> {
    Lexer::new(input).collect()
}
