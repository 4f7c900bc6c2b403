//! Splits a whitespace-free expression into a token stream.
use crate::{error::*, prelude::*, span::*};

use super::{char_ext::*, char_lexer::*, tokens::*};

struct Lexer<'s> {
    lexer: CharLexer<'s>,
    tokens: Vec<Token>,
}

/// Tokenizes an expression. Characters that cannot start a token are skipped; the expression is
/// only rejected when it contains no tokens at all.
pub fn lex(source: &str) -> Result<Vec<Token>, MalformedExpression> {
    Lexer::new(source).run()
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            lexer: CharLexer::new(source),
            tokens: vec![],
        }
    }

    /// Finishes the lexer and consumes it, producing a [`Vec<Token>`]
    /// containing the tokens it read.
    fn run(mut self) -> Result<Vec<Token>, MalformedExpression> {
        while !self.lexer.is_finished() {
            if !self.try_consume_token() {
                self.skip_unsupported();
            }
        }

        if self.tokens.is_empty() {
            return failure(Reason::NoTokens, self.lexer.span_from(Bytes::new(0)));
        }

        trace!("Lexed {} tokens", self.tokens.len());
        Ok(self.tokens)
    }

    /// Tries to consume a single token. If a valid token is found, the lexer is advanced past it
    /// and `true` is returned.
    fn try_consume_token(&mut self) -> bool {
        let start = self.lexer.byte_position();
        let next_kind = self
            .operand()
            .or_else(|| self.operator())
            .or_else(|| self.paren());

        match next_kind {
            Some(kind) => {
                let source = self.lexer.span_from(start);
                self.tokens.push(Token { source, kind });
                true
            }
            None => false,
        }
    }

    fn skip_unsupported(&mut self) {
        let position = self.lexer.byte_position();
        if let Some(ch) = self.lexer.try_next() {
            trace!("Skipping unsupported character {:?} at {}", ch, position);
        }
    }

    fn operand(&mut self) -> Option<TokenKind> {
        let operand = self.lexer.consume_while(CharExt::is_operand_char);
        if operand.is_empty() {
            None
        } else {
            Some(TokenKind::Operand(operand))
        }
    }

    fn operator(&mut self) -> Option<TokenKind> {
        let op = self.lexer.peek().and_then(Operator::from_char)?;
        self.lexer.try_next();
        Some(TokenKind::Operator(op))
    }

    fn paren(&mut self) -> Option<TokenKind> {
        if self.lexer.recognise('(') {
            Some(TokenKind::Paren(Paren::Open))
        } else if self.lexer.recognise(')') {
            Some(TokenKind::Paren(Paren::Close))
        } else {
            None
        }
    }
}
