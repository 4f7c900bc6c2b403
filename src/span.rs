//! Contains the [`Bytes`] and [`Span`] types, which describe positions in an expression.
use std::{
    fmt::{self, Debug, Display},
    ops::{AddAssign, Sub},
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Bytes(usize);
impl Bytes {
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}
impl Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Bytes> for usize {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
impl AddAssign<usize> for Bytes {
    fn add_assign(&mut self, rhs: usize) {
        *self = Self(self.0 + rhs)
    }
}
impl Sub<Bytes> for Bytes {
    type Output = Self;

    fn sub(self, rhs: Bytes) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: Bytes,
    end: Bytes,
}
impl Span {
    pub fn new(start: Bytes, end: Bytes) -> Self {
        Self { start, end }
    }

    pub fn zero() -> Self {
        Self::new(Bytes::new(0), Bytes::new(0))
    }

    pub fn length(&self) -> Bytes {
        self.end - self.start
    }

    pub fn start(&self) -> Bytes {
        self.start
    }

    pub fn lookup<'t>(&self, target: &'t str) -> &'t str {
        &target[usize::from(self.start)..usize::from(self.end)]
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
