//! Board positions.
//!
//! A `Position` is a plain value: 24 playable points, two bar slots and the
//! side to move. Every rules operation takes a `&Position` and returns a new
//! one, so the search can hold thousands of them without aliasing concerns.
//!
//! ## Layout
//!
//! ```text
//!  index  0 .. 5    First's home      (Second enters here)
//!  index 18 .. 23   Second's home     (First enters here)
//!  index 24         Second's bar
//!  index 25         First's bar
//! ```
//!
//! ## Invariants
//!
//! - A point has an owner iff its count is non-zero.
//! - A bar slot is only ever owned by its own side.
//! - Each side has at most 15 checkers on the board and bar; the rest have
//!   been borne off.
//!
//! Because empty points carry no owner, derived `Eq` and `Hash` are exact
//! structural comparisons and can be used for transposition dedup directly.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::side::{Side, SideMap};

/// Number of points a checker can travel over.
pub const NUM_PLAYABLE_POINTS: usize = 24;

/// Playable points plus the two bar slots.
pub const NUM_POINTS: usize = 26;

/// Points in a home quadrant.
pub const HOME_SIZE: usize = 6;

/// Checkers each side starts with.
pub const CHECKERS_PER_SIDE: usize = 15;

/// Destination index used by bear-off moves.
pub const BEAR_OFF: usize = 26;

/// Index into `Position::points`, or `BEAR_OFF` as a move destination.
pub type PointIndex = usize;

/// Standard opening layout for `First` as (point, count).
/// `Second` mirrors it through `23 - point`.
const STARTING_LAYOUT: [(usize, u8); 4] = [(23, 2), (12, 5), (7, 3), (5, 5)];

/// A stack of same-coloured checkers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Number of checkers stacked here.
    pub count: u8,
    /// Owning side, `None` iff `count == 0`.
    pub owner: Option<Side>,
}

impl Point {
    /// An unoccupied point.
    pub const EMPTY: Point = Point { count: 0, owner: None };

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True if `side` has at least one checker here.
    #[must_use]
    pub fn is_owned_by(&self, side: Side) -> bool {
        self.count > 0 && self.owner == Some(side)
    }

    /// True if `side` cannot land here (two or more opposing checkers).
    #[must_use]
    pub fn is_blocked_for(&self, side: Side) -> bool {
        self.count >= 2 && self.owner == Some(side.opponent())
    }

    /// True if `side` holds this point with two or more checkers.
    #[must_use]
    pub fn is_made_by(&self, side: Side) -> bool {
        self.count >= 2 && self.owner == Some(side)
    }

    /// True if `side` has exactly one (hittable) checker here.
    #[must_use]
    pub fn is_blot_of(&self, side: Side) -> bool {
        self.count == 1 && self.owner == Some(side)
    }
}

/// A full board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    points: [Point; NUM_POINTS],
    side_to_move: Side,
}

impl Position {
    /// A board with no checkers at all.
    #[must_use]
    pub fn empty(side_to_move: Side) -> Self {
        Self {
            points: [Point::EMPTY; NUM_POINTS],
            side_to_move,
        }
    }

    /// The standard opening position.
    #[must_use]
    pub fn starting(side_to_move: Side) -> Self {
        STARTING_LAYOUT
            .iter()
            .fold(Self::empty(side_to_move), |pos, &(point, count)| {
                pos.place(point, Side::First, count)
                    .place(NUM_PLAYABLE_POINTS - 1 - point, Side::Second, count)
            })
    }

    /// Return a copy with `point` holding exactly `count` checkers of `side`.
    ///
    /// A count of zero clears the point. Intended for setting up positions;
    /// the result is not validated.
    #[must_use]
    pub fn place(mut self, point: PointIndex, side: Side, count: u8) -> Self {
        assert!(point < NUM_PLAYABLE_POINTS, "point {point} is not playable");
        self.points[point] = if count == 0 {
            Point::EMPTY
        } else {
            Point { count, owner: Some(side) }
        };
        self
    }

    /// Return a copy with `count` of `side`'s checkers on the bar.
    #[must_use]
    pub fn with_bar(mut self, side: Side, count: u8) -> Self {
        self.points[side.bar_index()] = if count == 0 {
            Point::EMPTY
        } else {
            Point { count, owner: Some(side) }
        };
        self
    }

    /// Return a copy with a different side to move.
    #[must_use]
    pub fn with_side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Return a copy with the turn passed to the opponent.
    #[must_use]
    pub fn flip_turn(self) -> Self {
        let next = self.side_to_move.opponent();
        self.with_side_to_move(next)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// The point (playable or bar) at `index`.
    #[must_use]
    pub fn point(&self, index: PointIndex) -> Point {
        self.points[index]
    }

    /// All 26 slots, bar slots last.
    #[must_use]
    pub fn points(&self) -> &[Point; NUM_POINTS] {
        &self.points
    }

    /// Checkers `side` has waiting on the bar.
    #[must_use]
    pub fn bar_count(&self, side: Side) -> u8 {
        self.points[side.bar_index()].count
    }

    /// Playable points occupied by `side`, as (index, count).
    pub fn occupied_by(&self, side: Side) -> impl Iterator<Item = (PointIndex, u8)> + '_ {
        self.points[..NUM_PLAYABLE_POINTS]
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.is_owned_by(side))
            .map(|(i, p)| (i, p.count))
    }

    /// Checkers `side` still has on the board, bar included.
    #[must_use]
    pub fn checkers(&self, side: Side) -> usize {
        self.occupied_by(side).map(|(_, c)| c as usize).sum::<usize>()
            + self.bar_count(side) as usize
    }

    /// Checkers `side` has borne off.
    #[must_use]
    pub fn borne_off(&self, side: Side) -> usize {
        CHECKERS_PER_SIDE.saturating_sub(self.checkers(side))
    }

    /// Checkers remaining per side.
    #[must_use]
    pub fn checker_counts(&self) -> SideMap<usize> {
        SideMap::new(|side| self.checkers(side))
    }

    /// True if every remaining checker of `side` sits in its home quadrant.
    #[must_use]
    pub fn all_home(&self, side: Side) -> bool {
        self.bar_count(side) == 0 && self.occupied_by(side).all(|(i, _)| side.is_home(i))
    }

    /// The occupied point of `side` farthest from bearing off.
    #[must_use]
    pub fn farthest_point(&self, side: Side) -> Option<PointIndex> {
        self.occupied_by(side)
            .map(|(i, _)| i)
            .max_by_key(|&i| side.pips_to_exit(i))
    }

    /// Check the structural invariants.
    pub fn validate(&self) -> Result<()> {
        for (index, point) in self.points.iter().enumerate() {
            if (point.count == 0) != point.owner.is_none() {
                return Err(Error::InvalidPosition(format!(
                    "point {index} has count {} but owner {:?}",
                    point.count, point.owner
                )));
            }
        }

        for side in Side::ALL {
            let bar = self.points[side.bar_index()];
            if bar.count > 0 && bar.owner != Some(side) {
                return Err(Error::InvalidPosition(format!(
                    "{side}'s bar holds {:?} checkers",
                    bar.owner
                )));
            }

            let count = self.checkers(side);
            if count > CHECKERS_PER_SIDE {
                return Err(Error::TooManyCheckers { side, count });
            }
        }

        Ok(())
    }

    /// Encode into the opaque transport form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from the opaque transport form, rejecting invalid boards.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let pos: Position = bincode::deserialize(bytes)?;
        pos.validate()?;
        Ok(pos)
    }

    // === Mutation used by the move applier ===

    /// Lift one checker off `index`, clearing ownership when it empties.
    pub(crate) fn lift(&mut self, index: PointIndex) {
        let point = &mut self.points[index];
        point.count -= 1;
        if point.count == 0 {
            point.owner = None;
        }
    }

    /// Drop one checker of `side` onto `index`.
    pub(crate) fn drop_checker(&mut self, index: PointIndex, side: Side) {
        let point = &mut self.points[index];
        point.count += 1;
        point.owner = Some(side);
    }

    /// Replace the contents of `index` with a single checker of `side`.
    pub(crate) fn set_single(&mut self, index: PointIndex, side: Side) {
        self.points[index] = Point { count: 1, owner: Some(side) };
    }
}
