//! Move regime classification.
//!
//! The regime decides which move-generation rules apply to the side to
//! move. It must be recomputed after every single move because entering
//! from the bar or bearing off can change it halfway through a roll.

use serde::{Deserialize, Serialize};

use crate::core::{Position, Side};

/// Which rules govern the next move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    /// Ordinary point-to-point play.
    Normal,
    /// The side to move has checkers on the bar and must enter them first.
    BarEntry,
    /// All of the mover's checkers are home; bearing off is allowed.
    BearingOff,
    /// One side has no checkers left.
    GameOver,
}

/// Classify `pos` for its side to move.
///
/// Priority: bar entry, then game over, then bearing off, then normal.
#[must_use]
pub fn classify(pos: &Position) -> Regime {
    let mover = pos.side_to_move();

    if pos.bar_count(mover) > 0 {
        Regime::BarEntry
    } else if Side::ALL.iter().any(|&side| pos.checkers(side) == 0) {
        Regime::GameOver
    } else if pos.all_home(mover) {
        Regime::BearingOff
    } else {
        Regime::Normal
    }
}

/// The side that has borne off all of its checkers, if any.
///
/// When both sides are empty (only possible in hand-built positions) the
/// side that is *not* to move is reported, since it made the last move.
#[must_use]
pub fn winner(pos: &Position) -> Option<Side> {
    let mover = pos.side_to_move();
    [mover.opponent(), mover]
        .into_iter()
        .find(|&side| pos.checkers(side) == 0)
}
