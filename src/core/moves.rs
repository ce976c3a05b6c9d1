//! Moves, move rolls and dice.
//!
//! ## Move
//!
//! One checker moved by one die: point to point, bar to point, or point to
//! off the board. A `Move` only means something relative to the position
//! it was generated from.
//!
//! ## MoveRoll
//!
//! Everything a side does in one turn: up to two moves for a plain roll,
//! up to four for doubles. Stored inline via `SmallVec` so generating
//! thousands of them in the search does not touch the heap.
//!
//! ## DiePair
//!
//! Two validated die values. `DiePair::all()` enumerates the 21 distinct
//! unordered rolls used when the search models the opponent's dice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{Error, Result};
use super::position::{PointIndex, BEAR_OFF};
use super::side::Side;

/// The most moves a single turn can contain.
pub const MAX_MOVES_PER_ROLL: usize = 4;

/// Kind of atomic move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Point to point along the board.
    Normal,
    /// From the bar into the opponent's home.
    BarEntry,
    /// From the home quadrant off the board.
    BearOff,
}

/// A single checker movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: PointIndex,
    to: PointIndex,
    kind: MoveKind,
}

impl Move {
    /// Point-to-point move.
    #[must_use]
    pub const fn normal(from: PointIndex, to: PointIndex) -> Self {
        Self { from, to, kind: MoveKind::Normal }
    }

    /// Enter a checker of `side` from its bar onto `to`.
    #[must_use]
    pub const fn enter(side: Side, to: PointIndex) -> Self {
        Self { from: side.bar_index(), to, kind: MoveKind::BarEntry }
    }

    /// Bear a checker off from `from`.
    #[must_use]
    pub const fn bear_off(from: PointIndex) -> Self {
        Self { from, to: BEAR_OFF, kind: MoveKind::BearOff }
    }

    #[must_use]
    pub const fn origin(&self) -> PointIndex {
        self.from
    }

    /// Destination index, `BEAR_OFF` for bear-off moves.
    #[must_use]
    pub const fn target(&self) -> PointIndex {
        self.to
    }

    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Normal => write!(f, "{}/{}", self.from, self.to),
            MoveKind::BarEntry => write!(f, "bar/{}", self.to),
            MoveKind::BearOff => write!(f, "{}/off", self.from),
        }
    }
}

/// The ordered moves making up one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRoll {
    moves: SmallVec<[Move; MAX_MOVES_PER_ROLL]>,
}

impl MoveRoll {
    /// An empty roll, used for a forced pass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        assert!(
            self.moves.len() < MAX_MOVES_PER_ROLL,
            "a roll holds at most {MAX_MOVES_PER_ROLL} moves"
        );
        self.moves.push(mv);
    }

    /// Return a copy extended by `mv`.
    #[must_use]
    pub fn with(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.push(mv);
        next
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveRoll {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut roll = MoveRoll::new();
        for mv in iter {
            roll.push(mv);
        }
        roll
    }
}

impl<'a> IntoIterator for &'a MoveRoll {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Display for MoveRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "(pass)");
        }
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

/// Two die values, each in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiePair {
    first: u8,
    second: u8,
}

impl DiePair {
    /// Create a pair, rejecting values outside `1..=6`.
    pub fn new(first: u8, second: u8) -> Result<Self> {
        for die in [first, second] {
            if !(1..=6).contains(&die) {
                return Err(Error::InvalidDie(die));
            }
        }
        Ok(Self { first, second })
    }

    /// Build from values already known to be in range.
    pub(crate) const fn from_valid(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// All 21 distinct unordered rolls, larger die first.
    pub fn all() -> impl Iterator<Item = DiePair> {
        (1..=6u8).flat_map(|high| (1..=high).map(move |low| DiePair::from_valid(high, low)))
    }

    #[must_use]
    pub const fn first(&self) -> u8 {
        self.first
    }

    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.first == self.second
    }

    #[must_use]
    pub fn high(&self) -> u8 {
        self.first.max(self.second)
    }

    #[must_use]
    pub fn low(&self) -> u8 {
        self.first.min(self.second)
    }
}

impl std::fmt::Display for DiePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
