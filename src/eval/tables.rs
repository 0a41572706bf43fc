//! Material values and piece-square tables.
//!
//! Tables are laid out from White's point of view with a1 = 0 and h8 = 63,
//! so the first row of each literal is the first rank. Black reads them
//! through a vertical mirror.

use crate::types::{
    Color, Piece, Square, Value, BISHOP_VALUE, KING_VALUE, KNIGHT_VALUE, PAWN_VALUE, QUEEN_VALUE,
    ROOK_VALUE,
};

/// A bonus per square.
pub type SquareTable = [Value; 64];

/// Rewards advancement toward the opponent and central pawns.
#[rustfmt::skip]
pub const ADVANCEMENT: SquareTable = [
     0,  5,  5,-10,-10,  5,  5,  0,
     5, 10, 10,  0,  0, 10, 10,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
    70, 70, 70, 70, 70, 70, 70, 70,
     0,  0,  0,  0,  0,  0,  0,  0,
];

/// Material value per piece kind, indexed by `Piece::to_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceValues([Value; 6]);

impl PieceValues {
    pub const fn new(values: [Value; 6]) -> Self {
        PieceValues(values)
    }

    #[inline]
    pub fn get(&self, piece: Piece) -> Value {
        self.0[piece.to_index()]
    }
}

pub static STANDARD_VALUES: PieceValues = PieceValues([
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
]);

/// One square table per piece kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceSquareTables([SquareTable; 6]);

/// Every piece kind shares the advancement table.
pub static DEFAULT_TABLES: PieceSquareTables = PieceSquareTables([ADVANCEMENT; 6]);

impl PieceSquareTables {
    pub const fn new(tables: [SquareTable; 6]) -> Self {
        PieceSquareTables(tables)
    }

    /// Bonus for `piece` of `color` standing on `sq`.
    #[inline]
    pub fn bonus(&self, piece: Piece, sq: Square, color: Color) -> Value {
        self.0[piece.to_index()][pst_index(sq, color)]
    }
}

/// Get PST index for a square from the owner's perspective
#[inline]
fn pst_index(sq: Square, color: Color) -> usize {
    let idx = sq.to_index();
    if color == Color::White {
        idx
    } else {
        // Flip for black (rank 8 -> rank 1)
        idx ^ 56
    }
}
