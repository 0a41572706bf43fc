//! Hand-built game trees for exercising the search without chess rules.

use crate::eval::Evaluator;
use crate::position::{Position, Side};
use crate::types::Score;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A node of an explicit game tree. Moves are child indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    /// Static score of this node
    pub score: i32,
    /// Whether the move leading here is a capture
    pub capture: bool,
    pub game_over: bool,
    pub children: Vec<Tree>,
}

impl Tree {
    pub fn leaf(score: i32) -> Self {
        Self { score, capture: false, game_over: false, children: Vec::new() }
    }

    pub fn node(score: i32, children: Vec<Tree>) -> Self {
        Self { score, capture: false, game_over: false, children }
    }

    /// Interior node whose own static score is irrelevant.
    pub fn branch(children: Vec<Tree>) -> Self {
        Self::node(0, children)
    }

    pub fn capture(mut self) -> Self {
        self.capture = true;
        self
    }

    pub fn terminal(mut self) -> Self {
        self.game_over = true;
        self
    }

    /// Random tree of the given height with 1..=max_branching children per
    /// interior node and a sprinkling of captures.
    pub fn random(seed: u64, height: u32, max_branching: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random_with(&mut rng, height, max_branching)
    }

    fn random_with(rng: &mut StdRng, height: u32, max_branching: usize) -> Self {
        let score = rng.gen_range(-500..=500);
        let capture = rng.gen_bool(0.3);
        if height == 0 {
            return Self { score, capture, game_over: false, children: Vec::new() };
        }
        let width = rng.gen_range(1..=max_branching);
        let children = (0..width)
            .map(|_| Self::random_with(rng, height - 1, max_branching))
            .collect();
        Self { score, capture, game_over: false, children }
    }
}

/// A cursor into a [`Tree`], implementing the rules-engine capabilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreePosition {
    root: Tree,
    root_side: Side,
    path: Vec<usize>,
}

impl TreePosition {
    pub fn new(root: Tree, root_side: Side) -> Self {
        Self { root, root_side, path: Vec::new() }
    }

    pub fn current(&self) -> &Tree {
        self.path.iter().fold(&self.root, |node, &i| &node.children[i])
    }
}

impl Position for TreePosition {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        (0..self.current().children.len()).collect()
    }

    fn is_capture(&self, mv: usize) -> bool {
        self.current().children[mv].capture
    }

    fn apply(&mut self, mv: usize) {
        self.path.push(mv);
    }

    fn undo(&mut self) {
        self.path.pop();
    }

    fn is_game_over(&self) -> bool {
        self.current().game_over
    }

    fn side_to_move(&self) -> Side {
        if self.path.len() % 2 == 0 {
            self.root_side
        } else {
            self.root_side.opposite()
        }
    }
}

/// Reads the static score stored on the current node.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeEvaluator;

impl Evaluator<TreePosition> for TreeEvaluator {
    fn evaluate(&self, position: &TreePosition) -> Score {
        Score::cp(position.current().score)
    }
}
