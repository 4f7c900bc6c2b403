//! Three-address code and quadruple generation for arithmetic expressions.
pub mod error;
pub mod generation;
pub mod il;
pub mod lexer;
pub mod listing;
pub mod parser;
pub mod span;

mod prelude;

pub use generation::{generate, EvaluationMode, Generation};
