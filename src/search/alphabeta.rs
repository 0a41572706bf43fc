//! Minimax search with alpha-beta pruning.
//!
//! One function serves both sides: `maximizing` says whether this ply wants
//! the highest or the lowest child score. Scores are always from the first
//! side's perspective (no negamax sign flipping).
//!
//! The position is mutated through apply/undo and is back in its original
//! state whenever a call returns.

use super::{ordering, Searcher};
use crate::eval::Evaluator;
use crate::position::Position;
use crate::types::{Depth, Score};

/// Result from a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub score: Score,
    /// None at frontier and terminal nodes
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    #[inline]
    fn frontier(score: Score) -> Self {
        Self { score, best_move: None }
    }
}

/// Frontier result. The window bounds must stay out of reach of the
/// evaluator or a cutoff could never fire against them.
#[inline]
fn static_eval<P, E>(searcher: &Searcher<E>, position: &P) -> SearchResult<P::Move>
where
    P: Position,
    E: Evaluator<P>,
{
    let score = searcher.evaluator().evaluate(position);
    debug_assert!(!score.is_infinite(), "evaluator returned a window bound: {:?}", score);
    SearchResult::frontier(score)
}

/// Alpha-beta search to `depth` plies.
pub fn search<P, E>(
    searcher: &mut Searcher<E>,
    position: &mut P,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> SearchResult<P::Move>
where
    P: Position,
    E: Evaluator<P>,
{
    searcher.inc_nodes();

    if depth.is_frontier() || position.is_game_over() {
        return static_eval(searcher, position);
    }

    let mut moves = position.legal_moves();

    // Rules engine says "not over" but offers nothing to play
    if moves.is_empty() {
        return static_eval(searcher, position);
    }

    ordering::order_moves(position, &mut moves);

    let mut best_move = None;
    let mut value = if maximizing { Score::neg_infinity() } else { Score::infinity() };

    for &m in moves.iter() {
        position.apply(m);
        let child = search(searcher, position, depth - 1, alpha, beta, !maximizing);
        position.undo();

        // Strict comparison: the first of several equal moves is kept
        if maximizing {
            if child.score > value {
                value = child.score;
                best_move = Some(m);
            }
            alpha = alpha.max(value);
        } else {
            if child.score < value {
                value = child.score;
                best_move = Some(m);
            }
            beta = beta.min(value);
        }

        if alpha >= beta {
            break;
        }
    }

    SearchResult { score: value, best_move }
}

/// Full minimax without pruning or ordering. Visits every node of the tree;
/// the root score always matches [`search`].
pub fn minimax<P, E>(
    searcher: &mut Searcher<E>,
    position: &mut P,
    depth: Depth,
    maximizing: bool,
) -> SearchResult<P::Move>
where
    P: Position,
    E: Evaluator<P>,
{
    searcher.inc_nodes();

    if depth.is_frontier() || position.is_game_over() {
        return static_eval(searcher, position);
    }

    let moves = position.legal_moves();
    if moves.is_empty() {
        return static_eval(searcher, position);
    }

    let mut best_move = None;
    let mut value = if maximizing { Score::neg_infinity() } else { Score::infinity() };

    for &m in moves.iter() {
        position.apply(m);
        let child = minimax(searcher, position, depth - 1, !maximizing);
        position.undo();

        let better = if maximizing { child.score > value } else { child.score < value };
        if better {
            value = child.score;
            best_move = Some(m);
        }
    }

    SearchResult { score: value, best_move }
}
