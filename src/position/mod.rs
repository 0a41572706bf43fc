//! The rules-engine seam.
//!
//! Search and ordering never look inside a position: they go through the
//! [`Position`] capability set. [`ChessPosition`] provides it for real chess
//! on top of the `chess` crate; tests provide it for hand-built game trees.

mod board;

pub use board::ChessPosition;

use crate::types::Color;
use std::fmt::Debug;

/// The two players. `First` is the side the evaluator scores positively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Whether this side maximizes the (first-side relative) score.
    #[inline]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Side::First)
    }
}

impl From<Color> for Side {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::First,
            Color::Black => Side::Second,
        }
    }
}

/// Capabilities the search needs from a rules engine.
///
/// `apply` and `undo` must nest: `undo` reverses the most recent `apply`
/// that has not been undone yet.
pub trait Position {
    type Move: Copy + PartialEq + Debug;

    /// All legal moves for the side to move, in generation order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Whether `mv` captures a piece in this position.
    fn is_capture(&self, mv: Self::Move) -> bool;

    fn apply(&mut self, mv: Self::Move);

    fn undo(&mut self);

    /// Checkmate, stalemate, or any other condition that ends the game.
    fn is_game_over(&self) -> bool;

    fn side_to_move(&self) -> Side;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_color() {
        assert_eq!(Side::from(Color::White), Side::First);
        assert_eq!(Side::from(Color::Black), Side::Second);
        assert_eq!(Side::First.opposite(), Side::Second);
        assert!(Side::First.is_maximizing());
        assert!(!Side::Second.is_maximizing());
    }
}
