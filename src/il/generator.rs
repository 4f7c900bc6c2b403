use crate::{error::*, lexer::tokens::Operator, parser::Postfix, prelude::*, span::Span};

use super::{name_generator::*, tac::*};

/// Generate a three-address code listing from a postfix sequence. Every operator application is
/// assigned to a fresh temporary, and the listing ends with a copy into `result`.
pub fn generate(postfix: Vec<Postfix>) -> Result<TacListing, MalformedExpression> {
    TacGenerator::generate(postfix)
}

struct TacGenerator {
    listing: TacListing,
    name_generator: NameGenerator,
    /// Operand tokens and previously generated temporaries, waiting to be consumed.
    operands: Vec<Value>,
}
impl TacGenerator {
    fn generate(postfix: Vec<Postfix>) -> Result<TacListing, MalformedExpression> {
        let mut tac = Self {
            listing: TacListing::new(),
            name_generator: NameGenerator::new(),
            operands: vec![],
        };

        for item in postfix {
            let value = match item {
                Postfix::Operand(atom) => Value::Atom(atom),
                Postfix::Operator(op, source) => tac.lower_operator(op, source)?,
            };
            tac.operands.push(value);
        }

        tac.emit_result()?;
        Ok(tac.listing)
    }

    /// Lower an operator by applying it to the two topmost operands. The operand pushed last is
    /// the right-hand side.
    fn lower_operator(&mut self, op: Operator, source: Span) -> Result<Value, MalformedExpression> {
        let (lhs, rhs) = match (self.operands.pop(), self.operands.pop()) {
            (Some(rhs), Some(lhs)) => (lhs, rhs),
            _ => return failure(Reason::MissingOperand(op), source),
        };

        let res_name = self.name_generator.next_temp();
        self.emit(TacInstr::Bin(res_name.clone(), op, lhs, rhs));

        Ok(Value::Name(res_name))
    }

    /// Emit the final copy of the topmost operand into `result`.
    fn emit_result(&mut self) -> Result<(), MalformedExpression> {
        let value = match self.operands.pop() {
            Some(value) => value,
            None => return failure(Reason::NoResult, Span::zero()),
        };

        if !self.operands.is_empty() {
            let unused: Vec<_> = self.operands.iter().map(ToString::to_string).collect();
            warn!("Operands without an operator are ignored: {}", unused.join(", "));
        }

        self.emit(TacInstr::Assign(Name::Result, value));
        Ok(())
    }

    /// Emit an instruction, adding it to the listing.
    fn emit(&mut self, instr: TacInstr) {
        trace!("Emit {}", instr);
        self.listing.push(instr);
    }
}

#[cfg(test)]
mod tests {
    use crate::{lexer::lex, parser::to_postfix};

    use super::*;

    macro_rules! assert_generates {
        ($source:expr, $il:expr) => {{
            let tokens = lex($source).unwrap();
            let instrs = generate(to_postfix(tokens)).unwrap();

            let instr_lines: Vec<_> = instrs.into_vec().iter().map(|i| i.to_string()).collect();

            assert_eq!(&$il[..], instr_lines)
        }};
    }

    fn failure_reason(source: &str) -> Reason {
        let tokens = lex(source).unwrap();
        match generate(to_postfix(tokens)) {
            Ok(listing) => panic!("Expected {:?} to fail, got:\n{}", source, listing),
            Err(error) => error.reason().clone(),
        }
    }

    #[test]
    fn single_operand_is_copied_into_result() {
        assert_generates!("a", ["result = a"])
    }

    #[test]
    fn precedence_determines_evaluation_order() {
        assert_generates!("a+b*c", ["t1 = b * c", "t2 = a + t1", "result = t2"])
    }

    #[test]
    fn parenthesised_expression_is_evaluated_first() {
        assert_generates!("(a+b)*c", ["t1 = a + b", "t2 = t1 * c", "result = t2"])
    }

    #[test]
    fn second_popped_operand_is_left_hand_side() {
        assert_generates!("a-b/c", ["t1 = b / c", "t2 = a - t1", "result = t2"])
    }

    #[test]
    fn temporaries_are_allocated_in_order() {
        assert_generates!(
            "(a+b)*(c-d)/e",
            [
                "t1 = a + b",
                "t2 = c - d",
                "t3 = t1 * t2",
                "t4 = t3 / e",
                "result = t4"
            ]
        )
    }

    #[test]
    fn leading_operator_is_missing_an_operand() {
        assert_eq!(
            Reason::MissingOperand(Operator::Add),
            failure_reason("+a")
        );
    }

    #[test]
    fn operators_without_operands_fail() {
        assert_eq!(
            Reason::MissingOperand(Operator::Multiply),
            failure_reason("***")
        );
    }

    #[test]
    fn parentheses_without_operands_produce_no_result() {
        assert_eq!(Reason::NoResult, failure_reason("()"));
    }

    #[test]
    fn missing_operand_points_at_the_operator() {
        let tokens = lex("a*").unwrap();
        let error = generate(to_postfix(tokens)).unwrap_err();

        assert_eq!("*", error.range().lookup("a*"));
    }

    #[test]
    fn stray_operands_are_ignored() {
        assert_generates!("a(b)", ["result = b"])
    }
}
