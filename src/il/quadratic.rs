//! Fixed instruction template for quadratics of the form `ax^2+bx+c`.
use crate::{
    error::*,
    lexer::{tokens::Operator, CharExt, CharLexer},
    prelude::*,
};

use super::{name_generator::*, tac::*};

/// Generate the six-instruction listing for a quadratic. The expression must match
/// `<a>x^2<+|-><b>x<+|-><c>` exactly, where `a`, `b` and `c` are alphanumeric atoms.
pub fn generate_quadratic(expression: &str) -> Result<TacListing, MalformedExpression> {
    let terms = Terms::parse(expression)?;
    debug!(
        "Quadratic terms: a = {}, b = {}, c = {} ({} {})",
        terms.a, terms.b, terms.c, terms.sign1, terms.sign2
    );
    Ok(terms.instantiate())
}

#[derive(Debug, PartialEq, Eq)]
struct Terms {
    a: String,
    sign1: Operator,
    b: String,
    sign2: Operator,
    c: String,
}

impl Terms {
    fn parse(expression: &str) -> Result<Self, MalformedExpression> {
        let mut lexer = CharLexer::new(expression);

        let a = coefficient(&mut lexer)?;
        if !(lexer.recognise('^') && lexer.recognise('2')) {
            return unexpected(&lexer, Shape::Square);
        }
        let sign1 = sign(&mut lexer)?;
        let b = coefficient(&mut lexer)?;
        let sign2 = sign(&mut lexer)?;
        let c = lexer.consume_while(CharExt::is_operand_char);
        if c.is_empty() {
            return unexpected(&lexer, Shape::Constant);
        }
        if !lexer.is_finished() {
            return unexpected(&lexer, Shape::End);
        }

        Ok(Self {
            a,
            sign1,
            b,
            sign2,
            c,
        })
    }

    fn instantiate(self) -> TacListing {
        let mut names = NameGenerator::new();
        let mut listing = TacListing::new();
        let x = || Value::atom("x");

        let t1 = names.next_temp();
        listing.push(TacInstr::Bin(t1.clone(), Operator::Multiply, Value::Atom(self.a), x()));
        let t2 = names.next_temp();
        listing.push(TacInstr::Bin(t2.clone(), Operator::Multiply, Value::Name(t1), x()));
        let t3 = names.next_temp();
        listing.push(TacInstr::Bin(t3.clone(), Operator::Multiply, Value::Atom(self.b), x()));
        let t4 = names.next_temp();
        listing.push(TacInstr::Bin(
            t4.clone(),
            self.sign1,
            Value::Name(t2),
            Value::Name(t3),
        ));
        let t5 = names.next_temp();
        listing.push(TacInstr::Bin(
            t5.clone(),
            self.sign2,
            Value::Name(t4),
            Value::Atom(self.c),
        ));
        listing.push(TacInstr::Assign(Name::Result, Value::Name(t5)));

        listing
    }
}

/// Reads an alphanumeric run that ends in `x`, returning the run without that `x`.
fn coefficient(lexer: &mut CharLexer) -> Result<String, MalformedExpression> {
    let start = lexer.byte_position();
    let run = lexer.consume_while(CharExt::is_operand_char);
    match run.strip_suffix('x') {
        Some(coefficient) if !coefficient.is_empty() => Ok(coefficient.to_string()),
        _ => failure(
            Reason::NotQuadratic(Shape::Coefficient),
            lexer.span_from(start),
        ),
    }
}

fn sign(lexer: &mut CharLexer) -> Result<Operator, MalformedExpression> {
    match lexer.next_if(CharExt::is_term_sign).and_then(Operator::from_char) {
        Some(op) => Ok(op),
        None => unexpected(lexer, Shape::Sign),
    }
}

/// Fails at the lexer's current position, spanning the next character if there is one.
fn unexpected<R>(lexer: &CharLexer, expected: Shape) -> Result<R, MalformedExpression> {
    let start = lexer.byte_position();
    let mut ahead = lexer.clone();
    ahead.try_next();
    failure(Reason::NotQuadratic(expected), ahead.span_from(start))
}
