use crate::ast::Operator;
use crate::functions::Function;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Multiply,
    Divide,
    LeftParen,
    RightParen,
    Comma,
    Pow,
    Abs,
    Min,
    Max,
    EndOfInput,
}

impl TokenKind {
    /// Single-character operators and punctuation.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Multiply),
            '/' => Some(TokenKind::Divide),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Minus => Some(Operator::Subtract),
            TokenKind::Multiply => Some(Operator::Multiply),
            TokenKind::Divide => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<Function> {
        match self {
            TokenKind::Pow => Some(Function::Pow),
            TokenKind::Abs => Some(Function::Abs),
            TokenKind::Min => Some(Function::Min),
            TokenKind::Max => Some(Function::Max),
            _ => None,
        }
    }
}

impl From<Function> for TokenKind {
    fn from(value: Function) -> Self {
        match value {
            Function::Pow => TokenKind::Pow,
            Function::Abs => TokenKind::Abs,
            Function::Min => TokenKind::Min,
            Function::Max => TokenKind::Max,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Multiply => write!(f, "'*'"),
            TokenKind::Divide => write!(f, "'/'"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Pow => write!(f, "'pow'"),
            TokenKind::Abs => write!(f, "'abs'"),
            TokenKind::Min => write!(f, "'min'"),
            TokenKind::Max => write!(f, "'max'"),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A classified slice of the input. `literal` is only set for numbers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub literal: Option<&'a str>,
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self {
            kind,
            literal: None,
            position,
        }
    }

    pub fn number(literal: &'a str, position: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            literal: Some(literal),
            position,
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
