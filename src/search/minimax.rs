//! Depth-limited minimax with alpha-beta pruning.
//!
//! The root tries every legal roll for the dice actually thrown. Below the
//! root the dice are unknown, so each node's children are the union of the
//! legal rolls for all 21 distinct dice pairs, deduplicated by resulting
//! position. Children are shuffled with the search's seeded RNG and cut to
//! `SearchConfig::branch_cap` before being searched.
//!
//! Scores are always from the maximizing side's point of view. The
//! evaluator scores for the side to move, so leaf values are negated when
//! the other side is on roll.

use std::time::Instant;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::core::{DiePair, GameRng, MoveRoll, Position, Side};
use crate::eval::{Evaluator, HeuristicEvaluator};
use crate::rules::{classify, expand_roll, Regime};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Minimax search context.
///
/// Owns the configuration, evaluator and shuffle RNG. Reusable across
/// searches; statistics describe the most recent one.
pub struct Minimax {
    /// Search configuration.
    config: SearchConfig,

    /// Leaf evaluator.
    evaluator: Box<dyn Evaluator>,

    /// RNG for child ordering, reseeded per search.
    rng: GameRng,

    /// Statistics for the last search.
    stats: SearchStats,
}

impl Minimax {
    /// Create a search using the default heuristic evaluator.
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            evaluator: Box::new(HeuristicEvaluator::default()),
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom evaluator.
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best roll for `dice` in `pos`.
    ///
    /// Returns an empty roll when no legal roll exists (forced pass).
    pub fn search(
        &mut self,
        pos: &Position,
        depth: u32,
        maximizing: Side,
        dice: DiePair,
    ) -> MoveRoll {
        self.search_scored(pos, depth, maximizing, dice)
            .map(|(roll, _)| roll)
            .unwrap_or_default()
    }

    /// Pick the best roll and report its score.
    ///
    /// Ties keep the first roll in generation order. Returns `None` when no
    /// legal roll exists.
    pub fn search_scored(
        &mut self,
        pos: &Position,
        depth: u32,
        maximizing: Side,
        dice: DiePair,
    ) -> Option<(MoveRoll, f32)> {
        let start = Instant::now();
        self.stats.reset();
        self.rng = GameRng::new(self.config.seed);

        let candidates = expand_roll(pos, dice);
        self.stats.root_candidates = candidates.len() as u32;

        let best = match candidates.len() {
            0 => {
                debug!("no legal roll for {dice}, {} must pass", pos.side_to_move());
                None
            }
            1 => candidates.into_iter().next().map(|(roll, end)| {
                let score = self.leaf_value(&end.flip_turn(), maximizing);
                (roll, score)
            }),
            _ => {
                let mut best: Option<(MoveRoll, f32)> = None;
                for (roll, end) in candidates {
                    let alpha = best.as_ref().map_or(f32::NEG_INFINITY, |(_, s)| *s);
                    let score = self.minimax(
                        &end.flip_turn(),
                        depth.saturating_sub(1),
                        maximizing,
                        alpha,
                        f32::INFINITY,
                    );
                    trace!("candidate {roll}: {score}");

                    if best.as_ref().map_or(true, |(_, s)| score > *s) {
                        best = Some((roll, score));
                    }
                }
                best
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some((roll, score)) = &best {
            debug!(
                "depth {depth} {dice}: chose {roll} ({score}) from {} candidates, {} nodes, {} leaves, {} cutoffs in {}us",
                self.stats.root_candidates,
                self.stats.nodes,
                self.stats.leaves,
                self.stats.cutoffs,
                self.stats.time_us,
            );
        }
        best
    }

    fn minimax(
        &mut self,
        pos: &Position,
        depth: u32,
        maximizing: Side,
        mut alpha: f32,
        mut beta: f32,
    ) -> f32 {
        self.stats.nodes += 1;

        if depth == 0 || classify(pos) == Regime::GameOver {
            return self.leaf_value(pos, maximizing);
        }

        let mut children = successors(pos);
        if children.is_empty() {
            self.stats.forced_passes += 1;
            return self.minimax(&pos.flip_turn(), depth - 1, maximizing, alpha, beta);
        }

        self.rng.shuffle(&mut children);
        if let Some(cap) = self.config.branch_cap {
            children.truncate(cap);
        }

        if pos.side_to_move() == maximizing {
            let mut value = f32::NEG_INFINITY;
            for child in &children {
                value = value.max(self.minimax(child, depth - 1, maximizing, alpha, beta));
                alpha = alpha.max(value);
                if value >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        } else {
            let mut value = f32::INFINITY;
            for child in &children {
                value = value.min(self.minimax(child, depth - 1, maximizing, alpha, beta));
                beta = beta.min(value);
                if value <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        }
    }

    /// Evaluator score converted to the maximizing side's point of view.
    fn leaf_value(&mut self, pos: &Position, maximizing: Side) -> f32 {
        self.stats.leaves += 1;
        let score = self.evaluator.evaluate(pos);
        if pos.side_to_move() == maximizing {
            score
        } else {
            -score
        }
    }
}

/// Every distinct position reachable in one turn over all dice pairs, with
/// the turn already passed to the opponent.
fn successors(pos: &Position) -> Vec<Position> {
    let mut seen = FxHashSet::default();
    let mut children = Vec::new();

    for dice in DiePair::all() {
        for (_, end) in expand_roll(pos, dice) {
            let child = end.flip_turn();
            if seen.insert(child) {
                children.push(child);
            }
        }
    }

    children
}

/// Search with the default configuration and evaluator.
pub fn search(pos: &Position, depth: u32, maximizing: Side, dice: DiePair) -> MoveRoll {
    Minimax::new(SearchConfig::default()).search(pos, depth, maximizing, dice)
}
