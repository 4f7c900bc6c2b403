//! Error handling for expression compilation.
use std::fmt;

use thiserror::Error;

use crate::{
    lexer::tokens::Operator,
    span::{Bytes, Span},
};

pub trait PositionalError {
    fn range(&self) -> Span;
    fn describe(&self) -> String;

    fn length(&self) -> Bytes {
        self.range().length()
    }
}

/// The only way a generation request can fail. Carries the reason the expression was rejected
/// and the span of the whitespace-free expression where it was detected.
#[derive(Debug, Error)]
#[error("malformed expression: {reason}")]
pub struct MalformedExpression {
    reason: Reason,
    span: Span,
}

impl MalformedExpression {
    pub fn new(reason: Reason, span: Span) -> Self {
        Self { reason, span }
    }

    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl PositionalError for MalformedExpression {
    fn range(&self) -> Span {
        self.span
    }

    fn describe(&self) -> String {
        self.reason.to_string()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Reason {
    #[error("no operands or operators found")]
    NoTokens,
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(Operator),
    #[error("expression does not produce a value")]
    NoResult,
    #[error("expected {0}")]
    NotQuadratic(Shape),
    #[error("instruction '{0}' has no destination")]
    MalformedInstruction(String),
}

/// The part of the `ax^2+bx+c` shape the quadratic matcher was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A coefficient immediately followed by `x`.
    Coefficient,
    /// The `^2` exponent of the leading term.
    Square,
    /// A `+` or `-` between two terms.
    Sign,
    /// The trailing constant term.
    Constant,
    /// Nothing after the constant term.
    End,
}
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Shape::Coefficient => "a coefficient followed by 'x'",
            Shape::Square => "'^2'",
            Shape::Sign => "'+' or '-'",
            Shape::Constant => "a constant term",
            Shape::End => "the end of the expression",
        })
    }
}

pub fn failure<R>(reason: Reason, span: Span) -> Result<R, MalformedExpression> {
    Err(MalformedExpression::new(reason, span))
}
