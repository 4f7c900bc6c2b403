//! Functionality for converting an expression string into a [`Token`] stream.
mod char_ext;
mod char_lexer;
mod lexer;

pub mod tokens;

pub use char_ext::CharExt;
pub use char_lexer::CharLexer;
pub use lexer::*;

#[allow(unused_imports)]
use tokens::Token;
