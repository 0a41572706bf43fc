//! Search module for the chess engine.
//!
//! # Architecture
//! - `Searcher`: owns the evaluator and collects statistics
//! - `alphabeta`: fixed-depth minimax with alpha-beta pruning
//! - `ordering`: captures-first move ordering
//!
//! The searcher is generic over the rules engine: anything implementing
//! [`Position`] can be searched, given an [`Evaluator`] for it.

mod alphabeta;
mod ordering;

#[cfg(test)]
pub(crate) mod testing;

pub use alphabeta::{minimax, search, SearchResult};
pub use ordering::order_moves;

use crate::eval::Evaluator;
use crate::position::Position;
use crate::types::{Depth, NodeCount, Score};
use std::time::Instant;
use tracing::debug;

/// Search statistics collected during search
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes: NodeCount,
    pub depth: Depth,
    pub time_ms: u64,
}

impl SearchStats {
    pub fn nps(&self) -> u64 {
        if self.time_ms > 0 {
            self.nodes * 1000 / self.time_ms
        } else {
            0
        }
    }
}

/// Main search controller
pub struct Searcher<E> {
    evaluator: E,
    stats: SearchStats,
}

impl<E: Default> Default for Searcher<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E> Searcher<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Statistics of the last top-level search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Increment node counter
    #[inline]
    pub fn inc_nodes(&mut self) {
        self.stats.nodes += 1;
    }

    /// Alpha-beta search from `position` with an explicit window and side.
    ///
    /// Resets the statistics; `position` is unchanged on return.
    pub fn search<P>(
        &mut self,
        position: &mut P,
        depth: Depth,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> SearchResult<P::Move>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.stats = SearchStats { depth, ..SearchStats::default() };
        let start = Instant::now();

        let result = alphabeta::search(self, position, depth, alpha, beta, maximizing);

        self.stats.time_ms = start.elapsed().as_millis() as u64;
        debug!(
            depth = depth.raw(),
            nodes = self.stats.nodes,
            time_ms = self.stats.time_ms,
            score = result.score.raw(),
            "search finished"
        );
        result
    }

    /// Unpruned minimax over the same tree, for checking pruned results.
    pub fn search_unpruned<P>(
        &mut self,
        position: &mut P,
        depth: Depth,
        maximizing: bool,
    ) -> SearchResult<P::Move>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.stats = SearchStats { depth, ..SearchStats::default() };
        alphabeta::minimax(self, position, depth, maximizing)
    }

    /// Full-window search for the side to move.
    ///
    /// The first side maximizes and the second minimizes, matching the
    /// evaluator's sign convention.
    pub fn search_root<P>(&mut self, position: &mut P, depth: Depth) -> SearchResult<P::Move>
    where
        P: Position,
        E: Evaluator<P>,
    {
        let maximizing = position.side_to_move().is_maximizing();
        self.search(position, depth, Score::neg_infinity(), Score::infinity(), maximizing)
    }

    /// Pick a move for the side to move, or None when there is nothing to play.
    pub fn choose_move<P>(&mut self, position: &mut P, depth: Depth) -> Option<P::Move>
    where
        P: Position,
        E: Evaluator<P>,
    {
        let result = self.search_root(position, depth);
        debug!(best_move = ?result.best_move, score = result.score.raw(), "move chosen");
        result.best_move
    }
}
