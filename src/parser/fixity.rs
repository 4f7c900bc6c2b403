//! Operator associativity and precedence.
use crate::lexer::tokens::Operator;

pub type Precedence = u8;

/// A combination of associativity and precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixity {
    assoc: Assoc,
    precedence: Precedence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    #[allow(dead_code)]
    Right,
}
impl Fixity {
    pub fn for_operator(op: Operator) -> Self {
        let (assoc, precedence) = match op {
            Operator::Add | Operator::Subtract => (Assoc::Left, 1),
            Operator::Multiply | Operator::Divide => (Assoc::Left, 2),
        };
        Self { assoc, precedence }
    }

    /// Assuming `self` belongs to an incoming operator and `stacked` to the operator on top of the
    /// operator stack, returns whether the stacked operator must be emitted first.
    pub fn yields_to(&self, stacked: &Fixity) -> bool {
        match self.assoc {
            Assoc::Left => self.precedence <= stacked.precedence,
            Assoc::Right => self.precedence < stacked.precedence,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn incoming_operator_yields_to_higher_precedence() {
        let higher = Fixity {
            assoc: Assoc::Left,
            precedence: 2,
        };
        let lower = Fixity {
            assoc: Assoc::Right,
            precedence: 1,
        };

        assert!(lower.yields_to(&higher));
        assert!(!higher.yields_to(&lower));
    }

    #[test]
    fn left_associative_operator_yields_to_equal_precedence() {
        let incoming = Fixity {
            assoc: Assoc::Left,
            precedence: 2,
        };
        let stacked = Fixity {
            assoc: Assoc::Left,
            precedence: 2,
        };

        assert!(incoming.yields_to(&stacked))
    }

    #[test]
    fn right_associative_operator_does_not_yield_to_equal_precedence() {
        let incoming = Fixity {
            assoc: Assoc::Right,
            precedence: 2,
        };
        let stacked = Fixity {
            assoc: Assoc::Left,
            precedence: 2,
        };

        assert!(!incoming.yields_to(&stacked))
    }

    #[test]
    fn multiplicative_operators_bind_tighter_than_additive() {
        let add = Fixity::for_operator(Operator::Add);
        let divide = Fixity::for_operator(Operator::Divide);

        assert!(add.yields_to(&divide));
        assert!(!divide.yields_to(&add));
        assert!(add.yields_to(&Fixity::for_operator(Operator::Subtract)));
        assert!(divide.yields_to(&Fixity::for_operator(Operator::Multiply)));
    }
}
