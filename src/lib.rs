//! Fixed-depth alpha-beta chess engine.
//!
//! The rules of chess come from the `chess` crate; this crate adds a static
//! evaluator, captures-first move ordering and a minimax search with
//! alpha-beta pruning, plus a small game loop and a UCI front end.
//!
//! ```no_run
//! use chessbot::{choose_move, ChessPosition, Depth};
//!
//! let mut position = ChessPosition::default();
//! if let Some(mv) = choose_move(&mut position, Depth::new(2)) {
//!     println!("{}", chessbot::uci::format_move(mv));
//! }
//! ```

pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod position;
pub mod search;
pub mod types;
pub mod uci;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use eval::{Evaluator, MaterialEvaluator};
pub use game::{Game, GameMode, GameSnapshot, SessionStore};
pub use position::{ChessPosition, Position, Side};
pub use search::{SearchResult, Searcher};
pub use types::{Depth, Move, Score};

/// Pick a move for the side to move with the standard evaluator.
///
/// Returns None when the game is over. `position` is unchanged on return.
pub fn choose_move(position: &mut ChessPosition, depth: Depth) -> Option<Move> {
    Searcher::new(MaterialEvaluator::default()).choose_move(position, depth)
}
