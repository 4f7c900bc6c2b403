//! Quadruple representation of three-address code.
use std::fmt::{self, Display, Formatter};

use crate::{error::*, lexer::tokens::Operator, listing::Listing, span::Span};

use super::TacListing;

/// The operator column of a quadruple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadOp {
    /// A plain copy, written as `=`.
    Copy,
    Bin(Operator),
}
impl Display for QuadOp {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            QuadOp::Copy => f.write_str("="),
            QuadOp::Bin(op) => op.fmt(f),
        }
    }
}

/// An `(op, arg1, arg2, result)` record. For copies, `arg2` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadruple {
    pub op: QuadOp,
    pub arg1: String,
    pub arg2: String,
    pub dest: String,
}

impl Quadruple {
    /// Parses a rendered TAC line of the form `dest = expression`.
    pub fn parse(line: &str) -> Result<Self, MalformedExpression> {
        match line.split_once('=') {
            Some((dest, expression)) => Ok(Self::from_parts(dest.trim(), expression)),
            None => failure(Reason::MalformedInstruction(line.to_string()), Span::zero()),
        }
    }

    /// Builds a quadruple from the destination and right-hand side of a TAC line.
    ///
    /// Operators are scanned in the fixed order `+ - * /`. For each one present, the expression
    /// is split at its first occurrence; if both halves are non-empty, that operator wins. A later
    /// operator in the scan order overrides an earlier match.
    fn from_parts(dest: &str, expression: &str) -> Self {
        let expression = expression.trim();
        let mut quad = Self {
            op: QuadOp::Copy,
            arg1: expression.to_string(),
            arg2: String::new(),
            dest: dest.to_string(),
        };

        for op in Operator::SCAN_ORDER {
            if let Some((lhs, rhs)) = expression.split_once(op.symbol()) {
                let (lhs, rhs) = (lhs.trim(), rhs.trim());
                if !lhs.is_empty() && !rhs.is_empty() {
                    quad.op = QuadOp::Bin(op);
                    quad.arg1 = lhs.to_string();
                    quad.arg2 = rhs.to_string();
                }
            }
        }

        quad
    }
}
impl Display for Quadruple {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.op, self.arg1, self.arg2, self.dest)
    }
}

/// Convert every line of a TAC listing into a quadruple, preserving order.
pub fn to_quadruples(tac: &TacListing) -> Result<Listing<Quadruple>, MalformedExpression> {
    tac.iter_instructions()
        .map(|instr| Quadruple::parse(&instr.to_string()))
        .collect()
}
