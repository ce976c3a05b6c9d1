//! Move-roll generation.
//!
//! Combines the two dice into every distinct legal turn. The policy is:
//! use as many dice as possible, then keep one roll per distinct resulting
//! position. Dedup uses full structural equality of `Position` (hash set
//! lookups compare with `Eq`), so two different boards are never merged.
//!
//! ## Plain rolls
//!
//! Both die orders are tried. Two-move rolls win whenever any exist;
//! otherwise every single move with either die is offered.
//!
//! ## Doubles
//!
//! Built breadth-first up to four moves. Only the deepest level reached is
//! returned.

use rustc_hash::FxHashSet;

use crate::core::{DiePair, MoveRoll, Position, MAX_MOVES_PER_ROLL};

use super::apply::apply_move;
use super::die::moves_for_die;

/// Every distinct legal move roll for `dice` in `pos`.
///
/// Returns an empty vector when the side to move cannot move at all. Order
/// is deterministic: the generation order of the first roll reaching each
/// resulting position.
#[must_use]
pub fn moves_for_roll(pos: &Position, dice: DiePair) -> Vec<MoveRoll> {
    expand_roll(pos, dice)
        .into_iter()
        .map(|(roll, _)| roll)
        .collect()
}

/// Like [`moves_for_roll`], paired with each roll's resulting position.
#[must_use]
pub fn expand_roll(pos: &Position, dice: DiePair) -> Vec<(MoveRoll, Position)> {
    if dice.is_double() {
        expand_double(pos, dice.first())
    } else {
        expand_distinct(pos, dice.high(), dice.low())
    }
}

fn expand_distinct(pos: &Position, high: u8, low: u8) -> Vec<(MoveRoll, Position)> {
    let mut seen = FxHashSet::default();
    let mut rolls = Vec::new();

    for (first, second) in [(high, low), (low, high)] {
        for mv1 in moves_for_die(pos, first) {
            let mid = apply_move(pos, mv1);
            for mv2 in moves_for_die(&mid, second) {
                let end = apply_move(&mid, mv2);
                if seen.insert(end) {
                    let roll: MoveRoll = [mv1, mv2].into_iter().collect();
                    rolls.push((roll, end));
                }
            }
        }
    }

    if rolls.is_empty() {
        for die in [high, low] {
            for mv in moves_for_die(pos, die) {
                let end = apply_move(pos, mv);
                if seen.insert(end) {
                    rolls.push((MoveRoll::new().with(mv), end));
                }
            }
        }
    }

    rolls
}

fn expand_double(pos: &Position, die: u8) -> Vec<(MoveRoll, Position)> {
    let mut frontier = vec![(MoveRoll::new(), *pos)];
    let mut used = 0;

    while used < MAX_MOVES_PER_ROLL {
        let mut seen = FxHashSet::default();
        let mut next = Vec::new();

        for (roll, current) in &frontier {
            for mv in moves_for_die(current, die) {
                let end = apply_move(current, mv);
                if seen.insert(end) {
                    next.push((roll.with(mv), end));
                }
            }
        }

        if next.is_empty() {
            break;
        }
        frontier = next;
        used += 1;
    }

    if used == 0 {
        Vec::new()
    } else {
        frontier
    }
}
