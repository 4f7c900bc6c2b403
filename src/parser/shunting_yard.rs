use std::fmt::{self, Display};

use crate::{lexer::tokens::*, prelude::*, span::Span};

use super::fixity::Fixity;

/// An element of a postfix (reverse Polish) sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Postfix {
    Operand(String),
    /// An operator, along with the span of the token it came from.
    Operator(Operator, Span),
}
impl Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Postfix::Operand(operand) => f.write_str(operand),
            Postfix::Operator(op, _) => op.fmt(f),
        }
    }
}

/// Reorders an infix token stream into postfix order, dropping all parentheses.
///
/// Unbalanced parentheses are tolerated: a `)` without a matching `(` only flushes the operator
/// stack, and a `(` that is never closed is discarded.
pub fn to_postfix(tokens: Vec<Token>) -> Vec<Postfix> {
    let mut converter = ShuntingYard::new();
    for token in tokens {
        converter.push(token);
    }
    converter.finish()
}

struct ShuntingYard {
    output: Vec<Postfix>,
    stack: Vec<Token>,
}

impl ShuntingYard {
    fn new() -> Self {
        Self {
            output: vec![],
            stack: vec![],
        }
    }

    fn push(&mut self, token: Token) {
        match &token.kind {
            TokenKind::Operand(operand) => self.output.push(Postfix::Operand(operand.clone())),
            TokenKind::Operator(op) => {
                let fixity = Fixity::for_operator(*op);
                while let Some(stacked) = self.stacked_operator() {
                    if !fixity.yields_to(&Fixity::for_operator(stacked)) {
                        break;
                    }
                    self.pop_to_output();
                }
                self.stack.push(token);
            }
            TokenKind::Paren(Paren::Open) => self.stack.push(token),
            TokenKind::Paren(Paren::Close) => self.close_paren(token.source),
        }
    }

    /// Pops operators to the output until the matching `(` has been popped.
    fn close_paren(&mut self, source: Span) {
        loop {
            match self.stack.last().map(|t| &t.kind) {
                Some(TokenKind::Paren(Paren::Open)) => {
                    self.stack.pop();
                    return;
                }
                Some(_) => self.pop_to_output(),
                None => {
                    warn!("Ignoring unmatched ')' at {:?}", source);
                    return;
                }
            }
        }
    }

    fn finish(mut self) -> Vec<Postfix> {
        while let Some(token) = self.stack.pop() {
            match token.kind {
                TokenKind::Operator(op) => self.output.push(Postfix::Operator(op, token.source)),
                _ => warn!("Dropping unmatched '(' at {:?}", token.source),
            }
        }
        self.output
    }

    fn stacked_operator(&self) -> Option<Operator> {
        match self.stack.last().map(|t| &t.kind) {
            Some(TokenKind::Operator(op)) => Some(*op),
            _ => None,
        }
    }

    fn pop_to_output(&mut self) {
        if let Some(token) = self.stack.pop() {
            if let TokenKind::Operator(op) = token.kind {
                self.output.push(Postfix::Operator(op, token.source));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::lex;

    use super::*;

    fn postfix_of(source: &str) -> String {
        let tokens = lex(source).unwrap();
        to_postfix(tokens)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!("a b c * +", postfix_of("a+b*c"));
        assert_eq!("a b * c +", postfix_of("a*b+c"));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!("a b + c *", postfix_of("(a+b)*c"));
        assert_eq!("a b c d - * +", postfix_of("a+b*(c-d)"));
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!("a b - c -", postfix_of("a-b-c"));
        assert_eq!("a b / c *", postfix_of("a/b*c"));
    }

    #[test]
    fn nested_parentheses_are_removed() {
        assert_eq!("a b c + *", postfix_of("((a*((b+c))))"));
    }

    #[test]
    fn unmatched_close_paren_is_ignored() {
        assert_eq!("a b + c *", postfix_of("a+b)*c"));
    }

    #[test]
    fn unmatched_open_paren_is_dropped() {
        assert_eq!("a b c + *", postfix_of("a*(b+c"));
        assert_eq!("a", postfix_of("((a"));
    }

    #[test]
    fn leading_operator_is_emitted_after_operand() {
        assert_eq!("a +", postfix_of("+a"));
    }

    #[test]
    fn operators_keep_their_source_span() {
        let postfix = to_postfix(lex("a*b").unwrap());

        match &postfix[2] {
            Postfix::Operator(Operator::Multiply, span) => assert_eq!("*", span.lookup("a*b")),
            other => panic!("Expected '*', found {:?}", other),
        }
    }
}
