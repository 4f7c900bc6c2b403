//! Generic logic for code listings (TAC, quadruples).
mod generic_listing;
mod position;

pub use generic_listing::*;
pub use position::*;
