//! Core engine types: sides, positions, moves, dice, RNG, errors.
//!
//! Nothing in this module knows the rules of play; it only models the board
//! and keeps its structural invariants.

pub mod side;
pub mod position;
pub mod moves;
pub mod rng;
pub mod error;

pub use side::{Side, SideMap};
pub use position::{
    Point, PointIndex, Position, BEAR_OFF, CHECKERS_PER_SIDE, HOME_SIZE, NUM_PLAYABLE_POINTS,
    NUM_POINTS,
};
pub use moves::{DiePair, Move, MoveKind, MoveRoll, MAX_MOVES_PER_ROLL};
pub use rng::{GameRng, GameRngState};
pub use error::{Error, Result};
