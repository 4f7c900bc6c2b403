use std::{iter::Peekable, str::Chars};

use crate::span::{Bytes, Span};

/// Abstraction over a peekable char iterator with position information.
///
/// Since it only holds an iterator and a position, this type is very
/// lightweight, making it easy to clone in order to handle branching
/// and `LL(k)` lookahead.
#[derive(Clone)]
pub struct CharLexer<'a> {
    chars: Peekable<Chars<'a>>,
    byte_position: Bytes,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            byte_position: Bytes::new(0),
        }
    }

    /// Tries to advance the lexer by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.chars.next();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Returns the next character without consuming it.
    /// Returns [`None`] if the lexer cannot advance any further.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Retrieves the byte position of the lexer.
    pub fn byte_position(&self) -> Bytes {
        self.byte_position
    }

    /// A span from `start` up to the current position.
    pub fn span_from(&self, start: Bytes) -> Span {
        Span::new(start, self.byte_position)
    }

    /// Peeks at the next character, and consumes it if it matches the provided character.
    /// Returns true if the character was consumed, false otherwise.
    pub fn recognise(&mut self, character: char) -> bool {
        match self.chars.peek() {
            Some(ch) if ch == &character => {
                self.try_next();
                true
            }
            _ => false,
        }
    }

    /// Consumes the next character if `predicate` holds for it, returning it.
    pub fn next_if<P>(&mut self, predicate: P) -> Option<char>
    where
        P: FnOnce(&char) -> bool,
    {
        match self.chars.peek() {
            Some(ch) if predicate(ch) => self.try_next(),
            _ => None,
        }
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns a [`String`] containing the consumed characters.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> String
    where
        Self: Sized,
        P: FnMut(&char) -> bool,
    {
        let mut matches = String::new();
        while let Some(ch) = self.chars.peek() {
            if predicate(ch) {
                matches.push(*ch);
                self.try_next();
            } else {
                break;
            }
        }
        matches
    }

    /// Checks if the lexer is finished.
    pub fn is_finished(&mut self) -> bool {
        self.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_while_tracks_byte_position() {
        let mut lexer = CharLexer::new("ab1+c");

        assert_eq!("ab1", lexer.consume_while(|c| c.is_ascii_alphanumeric()));
        assert_eq!(Bytes::new(3), lexer.byte_position());
        assert_eq!(Some('+'), lexer.peek());
    }

    #[test]
    fn recognise_only_consumes_matching_character() {
        let mut lexer = CharLexer::new("^2");

        assert!(!lexer.recognise('2'));
        assert!(lexer.recognise('^'));
        assert!(lexer.recognise('2'));
        assert!(lexer.is_finished());
    }

    #[test]
    fn multibyte_characters_advance_by_their_utf8_length() {
        let mut lexer = CharLexer::new("²x");

        assert_eq!(Some('²'), lexer.try_next());
        assert_eq!(Span::new(Bytes::new(0), Bytes::new(2)), lexer.span_from(Bytes::new(0)));
    }
}
