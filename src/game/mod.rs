//! Game loop around the engine.
//!
//! A [`Game`] owns one position and decides, after each submitted move,
//! whether the engine replies. A [`SessionStore`] keeps one game per
//! session so that independent players never share a board.

mod session;

pub use session::{SessionId, SessionStore};

use crate::error::{Error, Result};
use crate::eval::MaterialEvaluator;
use crate::position::{ChessPosition, Position, Side};
use crate::search::Searcher;
use crate::types::{Depth, Move, DEFAULT_DEPTH};
use crate::uci::format_move;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Who plays the second side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Both sides are submitted by players
    #[default]
    #[serde(rename = "two")]
    TwoPlayer,
    /// The engine answers every move of the first side
    #[serde(rename = "ai")]
    VsEngine,
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "two" => Ok(GameMode::TwoPlayer),
            "ai" => Ok(GameMode::VsEngine),
            other => Err(format!("unknown mode `{other}` (expected `two` or `ai`)")),
        }
    }
}

/// Externally visible state of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub fen: String,
    /// 'w' or 'b'
    pub turn: char,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

pub struct Game {
    position: ChessPosition,
    mode: GameMode,
    depth: Depth,
    searcher: Searcher<MaterialEvaluator>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default(), DEFAULT_DEPTH)
    }
}

impl Game {
    /// The engine always takes the second side.
    pub const ENGINE_SIDE: Side = Side::Second;

    pub fn new(mode: GameMode, depth: Depth) -> Self {
        Self::with_position(ChessPosition::default(), mode, depth)
    }

    /// Start from an arbitrary position instead of the initial one.
    pub fn with_position(position: ChessPosition, mode: GameMode, depth: Depth) -> Self {
        Self {
            position,
            mode,
            depth,
            searcher: Searcher::default(),
        }
    }

    #[inline]
    pub fn position(&self) -> &ChessPosition {
        &self.position
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Switch mode; the board starts over.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.position = ChessPosition::default();
    }

    /// Legal moves in UCI notation.
    pub fn legal_moves(&self) -> Vec<String> {
        self.position.legal_moves().into_iter().map(format_move).collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            fen: self.position.fen(),
            turn: match self.position.side_to_move() {
                Side::First => 'w',
                Side::Second => 'b',
            },
            is_check: self.position.is_check(),
            is_checkmate: self.position.is_checkmate(),
            is_stalemate: self.position.is_stalemate(),
        }
    }

    /// Play a move given in UCI notation.
    ///
    /// Against the engine, the reply is applied too and returned.
    pub fn play(&mut self, uci: &str) -> Result<Option<Move>> {
        let mv = self
            .position
            .parse_move(uci)
            .ok_or_else(|| Error::IllegalMove { mv: uci.to_string() })?;
        self.position.apply(mv);

        if self.engine_to_move() {
            return Ok(self.engine_reply());
        }
        Ok(None)
    }

    fn engine_to_move(&self) -> bool {
        self.mode == GameMode::VsEngine
            && !self.position.is_game_over()
            && self.position.side_to_move() == Self::ENGINE_SIDE
    }

    fn engine_reply(&mut self) -> Option<Move> {
        let reply = self.searcher.choose_move(&mut self.position, self.depth)?;
        self.position.apply(reply);
        info!(
            reply = %format_move(reply),
            nodes = self.searcher.stats().nodes,
            "engine replied"
        );
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_alternates() {
        let mut game = Game::default();
        assert_eq!(game.play("e2e4").unwrap(), None);
        assert_eq!(game.snapshot().turn, 'b');
        assert_eq!(game.play("e7e5").unwrap(), None);
        assert_eq!(game.snapshot().turn, 'w');
        assert_eq!(game.position().ply_count(), 2);
    }

    #[test]
    fn test_engine_replies_in_ai_mode() {
        let mut game = Game::new(GameMode::VsEngine, Depth::new(2));
        let reply = game.play("e2e4").unwrap();
        assert!(reply.is_some());
        assert_eq!(game.snapshot().turn, 'w');
        assert_eq!(game.position().ply_count(), 2);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut game = Game::default();
        let before = game.snapshot();
        let err = game.play("e2e5").unwrap_err();
        assert!(matches!(err, Error::IllegalMove { ref mv } if mv == "e2e5"));
        assert_eq!(game.snapshot(), before);

        assert!(game.play("garbage").is_err());
    }

    #[test]
    fn test_no_reply_after_mate() {
        let position = ChessPosition::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut game = Game::with_position(position, GameMode::VsEngine, Depth::new(2));
        assert_eq!(game.play("a1a8").unwrap(), None);

        let snap = game.snapshot();
        assert!(snap.is_checkmate);
        assert!(snap.is_check);
        assert_eq!(snap.turn, 'b');
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_set_mode_resets() {
        let mut game = Game::default();
        game.play("d2d4").unwrap();
        game.set_mode(GameMode::VsEngine);
        assert_eq!(game.mode(), GameMode::VsEngine);
        assert_eq!(game.position().ply_count(), 0);
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn test_snapshot_serializes() {
        let game = Game::default();
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["turn"], "w");
        assert_eq!(json["is_checkmate"], false);
        assert_eq!(
            json["fen"],
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("ai".parse::<GameMode>().unwrap(), GameMode::VsEngine);
        assert_eq!("two".parse::<GameMode>().unwrap(), GameMode::TwoPlayer);
        assert!("solo".parse::<GameMode>().is_err());
    }
}
