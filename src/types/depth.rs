//! Search depth in plies.

use std::ops::Sub;

/// Depth used when neither the config nor the caller asks for another one.
pub const DEFAULT_DEPTH: Depth = Depth(2);

/// Remaining search depth (in plies).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Depth(pub i32);

impl Depth {
    pub const ZERO: Depth = Depth(0);
    pub const ONE: Depth = Depth(1);

    #[inline]
    pub const fn new(d: i32) -> Self {
        Depth(d)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Nothing left to search: evaluate statically.
    #[inline]
    pub const fn is_frontier(self) -> bool {
        self.0 <= 0
    }
}

impl Sub<i32> for Depth {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i32) -> Self {
        Depth(self.0 - rhs)
    }
}

impl From<i32> for Depth {
    #[inline]
    fn from(d: i32) -> Self {
        Depth(d)
    }
}
