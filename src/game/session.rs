//! Per-session game ownership.

use super::{Game, GameMode};
use crate::error::{Error, Result};
use crate::types::Depth;
use std::collections::HashMap;
use tracing::info;

/// Identifies one player's game.
pub type SessionId = String;

/// Owns one [`Game`] per session id.
pub struct SessionStore {
    games: HashMap<SessionId, Game>,
    /// Settings applied to newly created games
    mode: GameMode,
    depth: Depth,
}

impl SessionStore {
    pub fn new(mode: GameMode, depth: Depth) -> Self {
        Self {
            games: HashMap::new(),
            mode,
            depth,
        }
    }

    /// Game for `id`, created with the store defaults on first use.
    pub fn get_or_create(&mut self, id: &str) -> &mut Game {
        let (mode, depth) = (self.mode, self.depth);
        self.games.entry(id.to_string()).or_insert_with(|| {
            info!(session = id, ?mode, "new game session");
            Game::new(mode, depth)
        })
    }

    pub fn get(&mut self, id: &str) -> Result<&mut Game> {
        self.games
            .get_mut(id)
            .ok_or_else(|| Error::UnknownSession { id: id.to_string() })
    }

    /// Drop a session, returning its game if it existed.
    pub fn remove(&mut self, id: &str) -> Option<Game> {
        self.games.remove(id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
