//! Score type for search.
//!
//! Plain centipawns, positive favouring White. There is no mate encoding:
//! terminal positions are scored by material like any other.

use std::fmt;
use std::ops::{Add, Sub, Neg};

/// Bound used for the initial alpha-beta window. No evaluation reaches it.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// A static or searched evaluation in centipawns.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Score(pub i32);

impl Score {
    /// Create a new score from centipawns
    #[inline]
    pub const fn cp(centipawns: i32) -> Self {
        Score(centipawns)
    }

    #[inline]
    pub const fn infinity() -> Self {
        Score(SCORE_INFINITY)
    }

    #[inline]
    pub const fn neg_infinity() -> Self {
        Score(-SCORE_INFINITY)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// True for the window sentinels, which never come out of the evaluator.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 == SCORE_INFINITY || self.0 == -SCORE_INFINITY
    }
}

impl Add for Score {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Score(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Score {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Score(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Score {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        // i32::MIN is never produced, so plain negation cannot overflow
        Score(-self.0)
    }
}

impl From<i32> for Score {
    #[inline]
    fn from(v: i32) -> Self {
        Score(v)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cp {}", self.0)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self)
    }
}
