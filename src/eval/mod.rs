//! Static position evaluation.
//!
//! The search only sees positions through the `Evaluator` trait, so
//! alternative heuristics can be plugged in without touching it.

pub mod heuristic;

pub use heuristic::{pip_count, EvalWeights, HeuristicEvaluator};

use crate::core::Position;

/// Scores a position from the point of view of its side to move.
///
/// Implementations must be antisymmetric: flipping the side to move negates
/// the score. The search relies on this to score nodes for either side.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, pos: &Position) -> f32;
}

/// Evaluate `pos` with the default heuristic.
#[must_use]
pub fn evaluate(pos: &Position) -> f32 {
    HeuristicEvaluator::default().evaluate(pos)
}
