//! UCI (Universal Chess Interface) protocol handler.
//!
//! This module implements the subset of UCI a fixed-depth engine needs.
//! See: http://wbec-ridderkerk.nl/html/UCIProtocol.html

mod parser;
mod handler;

pub use handler::UciHandler;
pub use parser::{parse_command, UciCommand};

use crate::types::{Board, Depth, Move, MoveGen, Piece, Square};
use std::str::FromStr;

/// UCI engine identification
pub const ENGINE_NAME: &str = "chessbot";
pub const ENGINE_AUTHOR: &str = "chessbot developers";

/// Parameters from the "go" command.
///
/// Only the depth is honoured; clock and node limits are accepted and
/// ignored because the search has no cancellation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Search to this depth
    pub depth: Option<Depth>,
    /// A time or node limit was requested
    pub ignored_limits: Vec<String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create params for a fixed depth search
    pub fn fixed_depth(depth: i32) -> Self {
        Self {
            depth: Some(Depth::new(depth)),
            ..Default::default()
        }
    }
}

/// Parse a move string (e.g., "e2e4", "e7e8q") into a Move for the given board
pub fn parse_move(board: &Board, move_str: &str) -> Option<Move> {
    let move_str = move_str.trim();
    if !(4..=5).contains(&move_str.len()) || !move_str.is_ascii() {
        return None;
    }

    // Parse source and destination squares
    let from = Square::from_str(&move_str[0..2]).ok()?;
    let to = Square::from_str(&move_str[2..4]).ok()?;

    // Parse promotion piece if present
    let promo = match move_str[4..].chars().next() {
        None => None,
        Some('q' | 'Q') => Some(Piece::Queen),
        Some('r' | 'R') => Some(Piece::Rook),
        Some('b' | 'B') => Some(Piece::Bishop),
        Some('n' | 'N') => Some(Piece::Knight),
        Some(_) => return None,
    };

    // Find the matching legal move
    MoveGen::new_legal(board).find(|m| {
        m.get_source() == from && m.get_dest() == to && m.get_promotion() == promo
    })
}

/// Format a move to UCI notation (e.g., "e2e4", "e7e8q")
pub fn format_move(m: Move) -> String {
    let mut s = format!("{}{}", m.get_source(), m.get_dest());
    if let Some(promo) = m.get_promotion() {
        let c = match promo {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => unreachable!(),
        };
        s.push(c);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let board = Board::default();
        let m = parse_move(&board, "e2e4").unwrap();
        assert_eq!(m, Move::new(Square::E2, Square::E4, None));
        assert_eq!(format_move(m), "e2e4");
    }

    #[test]
    fn test_rejects_illegal_and_malformed() {
        let board = Board::default();
        assert_eq!(parse_move(&board, "e2e5"), None);
        assert_eq!(parse_move(&board, "e2"), None);
        assert_eq!(parse_move(&board, "z9e4"), None);
        assert_eq!(parse_move(&board, "e2e4x"), None);
    }

    #[test]
    fn test_promotion() {
        let board = Board::from_str("8/4P1k1/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let m = parse_move(&board, "e7e8n").unwrap();
        assert_eq!(m.get_promotion(), Some(Piece::Knight));
        assert_eq!(format_move(m), "e7e8n");
        // A promotion needs exactly one piece
        assert_eq!(parse_move(&board, "e7e8"), None);
        assert_eq!(parse_move(&board, "e7e8qq"), None);
        assert_eq!(parse_move(&board, "e7e8q "), parse_move(&board, "e7e8q"));
    }
}
