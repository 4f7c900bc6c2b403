//! Converts an infix token stream into postfix order.
mod fixity;
mod shunting_yard;

pub use shunting_yard::{to_postfix, Postfix};
