//! Three-Address Code

use std::fmt::{self, Display, Formatter};

use crate::{lexer::tokens::Operator, listing::Listing};

pub type TacListing = Listing<TacInstr>;

/// A single TAC instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacInstr {
    /// Copy a value into a name.
    Assign(Name, Value),
    /// Perform a binary operation.
    Bin(Name, Operator, Value, Value),
}
impl TacInstr {
    /// The name this instruction writes to.
    pub fn destination(&self) -> &Name {
        match self {
            Self::Assign(target, _) => target,
            Self::Bin(target, _, _, _) => target,
        }
    }

    /// The right-hand side of the instruction, as it appears in the listing.
    pub fn expression(&self) -> String {
        match self {
            Self::Assign(_, value) => value.to_string(),
            Self::Bin(_, op, lhs, rhs) => format!("{} {} {}", lhs, op, rhs),
        }
    }
}
impl Display for TacInstr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.destination(), self.expression())
    }
}

/// A TAC name. Names are the destinations of instructions: either a generated temporary, or the
/// final result of the expression.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Name {
    /// A generated, temporary name.
    Temp(usize),
    /// The value of the whole expression.
    Result,
}
impl Display for Name {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Name::Temp(temp) => write!(f, "t{}", temp),
            Name::Result => f.write_str("result"),
        }
    }
}

/// A TAC value. Values are either atoms taken verbatim from the expression, or references to
/// names that were defined earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An operand from the source expression. Atoms are symbolic and never evaluated.
    Atom(String),
    Name(Name),
}
impl Value {
    pub fn atom<S: Into<String>>(atom: S) -> Self {
        Self::Atom(atom.into())
    }
}
impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Atom(atom) => f.write_str(atom),
            Value::Name(name) => write!(f, "{}", name),
        }
    }
}
