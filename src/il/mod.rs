//! Intermediate code generation.

mod generator;
mod name_generator;
mod quadratic;
mod quadruple;
mod tac;

pub use generator::generate;
pub use quadratic::generate_quadratic;
pub use quadruple::*;
pub use tac::*;
