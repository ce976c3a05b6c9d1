//! Static positional heuristic.
//!
//! Three differential terms, each computed for both sides as if that side
//! were to move and oriented so larger is better for it:
//!
//! - **distance**: negated race length, with bar checkers charged by the
//!   expected number of turns needed to re-enter
//! - **coverage**: made points, weighted up toward the bearing-off end
//! - **exposure**: negated count of blots, heavy when an opposing checker is
//!   within direct range and heaviest inside the opponent's home board

use serde::{Deserialize, Serialize};

use crate::core::{Position, Side, HOME_SIZE};

use super::Evaluator;

/// Pips a bar checker has to travel before it can bear off.
const BAR_PIPS: f32 = 25.0;

/// Race cost charged to a bar checker before any entry delay.
const BAR_BASE_COST: f32 = 24.0;

/// Race cost of each expected turn spent waiting on the bar.
const DELAY_PIP_COST: f32 = 7.0;

/// Coverage bonus for a made point at 1..=7 pips from bearing off.
const COVERAGE_BONUS: [f32; 8] = [0.0, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 3.5];

/// Weights of the heuristic terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Weight of the race-distance difference.
    pub distance: f32,
    /// Weight of the made-point difference.
    pub coverage: f32,
    /// Weight of the blot-exposure difference.
    pub exposure: f32,
    /// Exposure charged for a blot an opposing checker can reach directly.
    pub hittable_blot: f32,
    /// Exposure charged for a blot inside the opponent's home board.
    pub entry_zone_blot: f32,
    /// Expected turns on the bar when every entry point is closed.
    pub closed_board_delay: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            distance: 100.0,
            coverage: 50.0,
            exposure: 50.0,
            hittable_blot: 5.0,
            entry_zone_blot: 6.0,
            closed_board_delay: 10.0,
        }
    }
}

/// The default evaluator.
#[derive(Clone, Debug, Default)]
pub struct HeuristicEvaluator {
    weights: EvalWeights,
}

impl HeuristicEvaluator {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Race length for `side`, bar delay included. Lower is better.
    #[must_use]
    pub fn distance(&self, pos: &Position, side: Side) -> f32 {
        let on_board: usize = pos
            .occupied_by(side)
            .map(|(i, count)| count as usize * side.pips_to_exit(i))
            .sum();

        let barred = pos.bar_count(side);
        let bar_cost = if barred > 0 {
            let delay = self.expected_entry_delay(open_entry_points(pos, side));
            ((delay - 1.0) * DELAY_PIP_COST + BAR_BASE_COST) * barred as f32
        } else {
            0.0
        };

        on_board as f32 + bar_cost
    }

    /// Made-point value for `side`. Higher is better.
    #[must_use]
    pub fn coverage(&self, pos: &Position, side: Side) -> f32 {
        pos.occupied_by(side)
            .filter(|&(_, count)| count >= 2)
            .map(|(i, _)| {
                let pips = side.pips_to_exit(i);
                let outfield = if pips > HOME_SIZE { 1.0 } else { 0.0 };
                outfield + COVERAGE_BONUS.get(pips).copied().unwrap_or(0.0)
            })
            .sum()
    }

    /// Blot exposure for `side`. Lower is better.
    #[must_use]
    pub fn exposure(&self, pos: &Position, side: Side) -> f32 {
        let opponent = side.opponent();
        pos.occupied_by(side)
            .filter(|&(_, count)| count == 1)
            .map(|(i, _)| {
                if opponent.is_home(i) {
                    self.weights.entry_zone_blot
                } else if within_direct_range(pos, i, opponent) {
                    self.weights.hittable_blot
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// Expected turns to enter from the bar with `open` entry points,
    /// treating each turn as two independent die throws.
    fn expected_entry_delay(&self, open: usize) -> f32 {
        if open == 0 {
            return self.weights.closed_board_delay;
        }
        let miss = (6.0 - open as f32) / 6.0;
        1.0 / (1.0 - miss * miss)
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, pos: &Position) -> f32 {
        let me = pos.side_to_move();
        let them = me.opponent();
        let w = &self.weights;

        let distance = self.distance(pos, them) - self.distance(pos, me);
        let coverage = self.coverage(pos, me) - self.coverage(pos, them);
        let exposure = self.exposure(pos, them) - self.exposure(pos, me);

        w.distance * distance + w.coverage * coverage + w.exposure * exposure
    }
}

/// Standard pip count: pips to bear everything off, 25 per bar checker.
#[must_use]
pub fn pip_count(pos: &Position, side: Side) -> u32 {
    let on_board: usize = pos
        .occupied_by(side)
        .map(|(i, count)| count as usize * side.pips_to_exit(i))
        .sum();
    on_board as u32 + pos.bar_count(side) as u32 * BAR_PIPS as u32
}

/// Entry points `side` could land on from the bar.
fn open_entry_points(pos: &Position, side: Side) -> usize {
    (1..=6)
        .filter(|&die| !pos.point(side.entry_point(die)).is_blocked_for(side))
        .count()
}

/// True if a checker of `attacker` sits 1 to 6 pips behind `point`.
fn within_direct_range(pos: &Position, point: usize, attacker: Side) -> bool {
    let back = -(attacker.direction() as i32);
    (1..=6).any(|distance| {
        let from = point as i32 + back * distance;
        (0..24).contains(&from) && pos.point(from as usize).is_owned_by(attacker)
    })
}
