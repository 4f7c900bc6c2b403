//! Useful character extensions.
pub trait CharExt {
    /// Whether this character may be part of an operand (`[A-Za-z0-9]`).
    fn is_operand_char(&self) -> bool;

    /// Whether this character may join two terms of a quadratic (`+` or `-`).
    fn is_term_sign(&self) -> bool;
}
impl CharExt for char {
    fn is_operand_char(&self) -> bool {
        self.is_ascii_alphanumeric()
    }

    fn is_term_sign(&self) -> bool {
        *self == '+' || *self == '-'
    }
}
