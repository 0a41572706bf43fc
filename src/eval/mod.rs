//! Board evaluation module.
//!
//! Material plus a piece-square bonus, always from White's perspective:
//! the search decides per ply which side wants the score high.

mod tables;

pub use tables::{
    PieceSquareTables, PieceValues, SquareTable, ADVANCEMENT, DEFAULT_TABLES, STANDARD_VALUES,
};

use crate::position::{ChessPosition, Position};
use crate::types::{Board, Color, Score, Value, ALL_PIECES};

/// Static evaluation used at frontier nodes.
pub trait Evaluator<P: Position> {
    /// Score `position`. Positive favours the first side.
    fn evaluate(&self, position: &P) -> Score;
}

/// Material and piece-square evaluation for chess.
#[derive(Clone, Copy, Debug)]
pub struct MaterialEvaluator {
    values: &'static PieceValues,
    tables: &'static PieceSquareTables,
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        Self::new(&STANDARD_VALUES, &DEFAULT_TABLES)
    }
}

impl MaterialEvaluator {
    pub const fn new(values: &'static PieceValues, tables: &'static PieceSquareTables) -> Self {
        Self { values, tables }
    }

    /// Evaluate the position from white's perspective
    pub fn evaluate_board(&self, board: &Board) -> Score {
        let mut score: Value = 0;

        for &color in &[Color::White, Color::Black] {
            let sign = if color == Color::White { 1 } else { -1 };

            for &piece in ALL_PIECES.iter() {
                for sq in board.pieces(piece) & board.color_combined(color) {
                    let material = self.values.get(piece);
                    let positional = self.tables.bonus(piece, sq, color);
                    score += sign * (material + positional);
                }
            }
        }

        Score::cp(score)
    }
}

impl Evaluator<ChessPosition> for MaterialEvaluator {
    #[inline]
    fn evaluate(&self, position: &ChessPosition) -> Score {
        self.evaluate_board(position.board())
    }
}

/// Evaluate with the standard tables.
pub fn evaluate(board: &Board) -> Score {
    MaterialEvaluator::default().evaluate_board(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn eval_fen(fen: &str) -> Score {
        evaluate(&Board::from_str(fen).unwrap())
    }

    #[test]
    fn test_starting_position_balanced() {
        assert_eq!(evaluate(&Board::default()), Score::cp(0));
    }

    #[test]
    fn test_pawn_advancement() {
        // Kings cancel out, so only the pawn remains
        assert_eq!(eval_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"), Score::cp(100));
        assert_eq!(eval_fen("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1"), Score::cp(170));
        assert_eq!(eval_fen("4k3/8/8/8/8/8/4p3/4K3 b - - 0 1"), Score::cp(-170));
    }

    #[test]
    fn test_material_advantage() {
        // White up a queen
        let score = eval_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(score.raw() > 800);
    }

    #[test]
    fn test_colour_mirror_negates() {
        let white = eval_fen("4k3/8/8/8/3N4/8/4P3/4K3 w - - 0 1");
        let black = eval_fen("4k3/4p3/8/3n4/8/8/8/4K3 b - - 0 1");
        assert_ne!(white, Score::cp(0));
        assert_eq!(white, -black);
    }

    #[test]
    fn test_side_to_move_ignored() {
        let w = eval_fen("4k3/8/8/8/3N4/8/4P3/4K3 w - - 0 1");
        let b = eval_fen("4k3/8/8/8/3N4/8/4P3/4K3 b - - 0 1");
        assert_eq!(w, b);
    }

    #[test]
    fn test_deterministic_for_equal_positions() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let a = ChessPosition::from_fen(fen).unwrap();
        let b = ChessPosition::from_fen(fen).unwrap();
        let evaluator = MaterialEvaluator::default();
        assert_eq!(evaluator.evaluate(&a), evaluator.evaluate(&b));
        assert_eq!(evaluator.evaluate(&a), evaluate(a.board()));
    }

    #[test]
    fn test_custom_tables() {
        static FLAT: PieceSquareTables = PieceSquareTables::new([[0; 64]; 6]);
        let evaluator = MaterialEvaluator::new(&STANDARD_VALUES, &FLAT);
        let board = Board::from_str("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(evaluator.evaluate_board(&board), Score::cp(100));
    }
}
