//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two players. `First` travels from point 23 toward point 0 and bears
//! off from points 0-5; `Second` travels the other way and bears off from
//! points 18-23. All direction-dependent board geometry lives here so the
//! rest of the engine never branches on colour by hand.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::{NUM_PLAYABLE_POINTS, HOME_SIZE};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Both sides, `First` then `Second`.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// Get the raw side index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Direction of travel along the point indices.
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Side::First => -1,
            Side::Second => 1,
        }
    }

    /// Board index holding this side's hit checkers.
    #[must_use]
    pub const fn bar_index(self) -> usize {
        match self {
            Side::First => 25,
            Side::Second => 24,
        }
    }

    /// Distance (in pips) from `point` to bearing off.
    #[must_use]
    pub const fn pips_to_exit(self, point: usize) -> usize {
        match self {
            Side::First => point + 1,
            Side::Second => NUM_PLAYABLE_POINTS - point,
        }
    }

    /// The point lying exactly `pips` away from bearing off.
    ///
    /// `pips` must be in `1..=24`.
    #[must_use]
    pub const fn point_at_pips(self, pips: usize) -> usize {
        match self {
            Side::First => pips - 1,
            Side::Second => NUM_PLAYABLE_POINTS - pips,
        }
    }

    /// Point where a checker enters from the bar with the given die.
    #[must_use]
    pub const fn entry_point(self, die: u8) -> usize {
        match self {
            Side::First => NUM_PLAYABLE_POINTS - die as usize,
            Side::Second => die as usize - 1,
        }
    }

    /// Destination after moving `pips` forward from `point`, if it stays on
    /// the playable board.
    #[must_use]
    pub fn advance(self, point: usize, pips: u8) -> Option<usize> {
        let target = point as i32 + self.direction() as i32 * pips as i32;
        (0..NUM_PLAYABLE_POINTS as i32)
            .contains(&target)
            .then_some(target as usize)
    }

    /// Whether `point` lies in this side's home quadrant.
    #[must_use]
    pub const fn is_home(self, point: usize) -> bool {
        point < NUM_PLAYABLE_POINTS && self.pips_to_exit(point) <= HOME_SIZE
    }

    /// Points of this side's home quadrant, nearest-to-exit first.
    pub fn home_points(self) -> impl Iterator<Item = usize> {
        (1..=HOME_SIZE).map(move |pips| self.point_at_pips(pips))
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "First"),
            Side::Second => write!(f, "Second"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Side, SideMap};
///
/// let mut pips: SideMap<u32> = SideMap::new(|_| 167);
/// pips[Side::Second] -= 6;
/// assert_eq!(pips[Side::First], 167);
/// assert_eq!(pips[Side::Second], 161);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::First), factory(Side::Second)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
