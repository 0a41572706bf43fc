//! `Position` implementation over the `chess` crate.
//!
//! `chess::Board` is an immutable value (`make_move_new`), so apply/undo
//! keeps the previous boards on a stack. The stack doubles as the history
//! needed for repetition detection, and the halfmove clock (which
//! `chess::Board` does not track) rides along with it.

use super::{Position, Side};
use crate::error::{Error, Result};
use crate::types::{BitBoard, Board, BoardStatus, Color, Move, MoveGen, Piece, EMPTY};
use std::str::FromStr;

/// Light squares (b1, d1, ..., a2, c2, ...), for same-coloured bishops.
const LIGHT_SQUARES: u64 = 0x55AA_55AA_55AA_55AA;

/// Halfmove clock value at which the 75-move rule ends the game.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Number of occurrences at which a repeated position ends the game.
const FIVEFOLD: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Undo {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// A chess game position with move history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessPosition {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<Undo>,
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl ChessPosition {
    /// Wrap a board with no history.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Parse a FEN string, including the halfmove clock and move number.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let board = Board::from_str(fen.trim()).map_err(|_| Error::InvalidFen {
            fen: fen.to_string(),
        })?;

        let mut fields = fen.split_whitespace().skip(4);
        let halfmove_clock = fields.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        let fullmove_number = fields.next().and_then(|s| s.parse().ok()).unwrap_or(1);

        Ok(Self {
            board,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        })
    }

    /// FEN of the current position.
    pub fn fen(&self) -> String {
        let board_fen = self.board.to_string();
        let placement: Vec<&str> = board_fen.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            placement.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Number of moves applied and not yet undone.
    #[inline]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        *self.board.checkers() != EMPTY
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    /// Neither side can possibly deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let decisive = *b.pieces(Piece::Pawn) | *b.pieces(Piece::Rook) | *b.pieces(Piece::Queen);
        if decisive != EMPTY {
            return false;
        }

        let knights = b.pieces(Piece::Knight).popcnt();
        let bishops = *b.pieces(Piece::Bishop);
        if knights + bishops.popcnt() <= 1 {
            return true;
        }

        // Any number of bishops confined to one square colour cannot mate
        if knights == 0 {
            let light = bishops & BitBoard::new(LIGHT_SQUARES);
            return light == EMPTY || light == bishops;
        }

        false
    }

    #[inline]
    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES
    }

    /// The current position has occurred five times.
    ///
    /// Only positions since the last capture or pawn move can repeat, so the
    /// scan is bounded by the halfmove clock.
    pub fn is_fivefold_repetition(&self) -> bool {
        let hash = self.board.get_hash();
        let reversible = (self.halfmove_clock as usize).min(self.history.len());
        let earlier = self.history[self.history.len() - reversible..]
            .iter()
            .filter(|undo| undo.board.get_hash() == hash)
            .count();
        earlier + 1 >= FIVEFOLD
    }

    /// Find the legal move matching a UCI string (e.g. "e2e4", "e7e8q").
    pub fn parse_move(&self, move_str: &str) -> Option<Move> {
        crate::uci::parse_move(&self.board, move_str)
    }
}

impl Position for ChessPosition {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        MoveGen::new_legal(&self.board).collect()
    }

    /// Destination occupied, or a pawn changing file onto an empty square
    /// (en passant).
    fn is_capture(&self, mv: Move) -> bool {
        if self.board.piece_on(mv.get_dest()).is_some() {
            return true;
        }
        self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
    }

    fn apply(&mut self, mv: Move) {
        let resets_clock =
            self.is_capture(mv) || self.board.piece_on(mv.get_source()) == Some(Piece::Pawn);
        let black_moved = self.board.side_to_move() == Color::Black;

        self.history.push(Undo {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        self.board = self.board.make_move_new(mv);
        self.halfmove_clock = if resets_clock { 0 } else { self.halfmove_clock + 1 };
        if black_moved {
            self.fullmove_number += 1;
        }
    }

    fn undo(&mut self) {
        if let Some(prev) = self.history.pop() {
            self.board = prev.board;
            self.halfmove_clock = prev.halfmove_clock;
            self.fullmove_number = prev.fullmove_number;
        }
    }

    fn is_game_over(&self) -> bool {
        self.board.status() != BoardStatus::Ongoing
            || self.is_insufficient_material()
            || self.is_seventyfive_moves()
            || self.is_fivefold_repetition()
    }

    #[inline]
    fn side_to_move(&self) -> Side {
        Side::from(self.board.side_to_move())
    }
}
