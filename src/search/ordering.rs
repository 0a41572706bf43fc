//! Move ordering heuristics.
//!
//! Captures are searched first; they are the moves most likely to raise
//! alpha (or lower beta) early and cut off the rest of the node.

use crate::position::Position;

/// Stable partition: every capture before every quiet move, each group in
/// its original order.
#[inline]
pub fn order_moves<P: Position>(position: &P, moves: &mut [P::Move]) {
    // sort_by_key is stable and `false` sorts first
    moves.sort_by_key(|&m| !position.is_capture(m));
}
