//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::Span;

#[derive(Clone, Debug)]
pub struct Token {
    pub source: Span,
    pub kind: TokenKind,
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of ASCII letters and digits. Operands are symbolic and never evaluated.
    Operand(String),
    Operator(Operator),
    Paren(Paren),
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Operand(operand) => f.write_str(operand),
            TokenKind::Operator(op) => op.fmt(f),
            TokenKind::Paren(Paren::Open) => f.write_str("("),
            TokenKind::Paren(Paren::Close) => f.write_str(")"),
        }
    }
}

/// A binary arithmetic operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}
impl Operator {
    /// All operators, in the order the quadruple converter scans for them.
    pub const SCAN_ORDER: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}
impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}
