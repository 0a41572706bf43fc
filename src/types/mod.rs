//! Core types for the engine.
//!
//! Board and move types come straight from the `chess` crate; the engine
//! only adds the search-facing numeric types (`Score`, `Depth`) and the
//! material scale.

mod score;
mod depth;

pub use score::{Score, SCORE_INFINITY};
pub use depth::{Depth, DEFAULT_DEPTH};

// Re-export chess crate types as canonical types
pub use chess::{
    Board,
    ChessMove as Move,
    Square,
    Piece,
    Color,
    BitBoard,
    MoveGen,
    BoardStatus,
    ALL_PIECES,
    EMPTY,
};

/// Node count type
pub type NodeCount = u64;

/// Centipawn value type (for piece values, table entries, etc.)
pub type Value = i32;

// Piece values in centipawns
pub const PAWN_VALUE: Value = 100;
pub const KNIGHT_VALUE: Value = 320;
pub const BISHOP_VALUE: Value = 330;
pub const ROOK_VALUE: Value = 500;
pub const QUEEN_VALUE: Value = 900;
pub const KING_VALUE: Value = 20000;

/// Get the material value of a piece in centipawns
#[inline]
pub const fn piece_value(piece: Piece) -> Value {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}
