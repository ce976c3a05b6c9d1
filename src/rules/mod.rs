//! The rules of play.
//!
//! Layered leaf-first:
//! - `regime`: which rules apply to the side to move
//! - `die`: atomic moves for one die value
//! - `apply`: applying moves and whole rolls to a position
//! - `roll`: every distinct legal turn for a pair of dice
//!
//! All functions are pure; positions go in by reference and new positions
//! come out.

pub mod regime;
pub mod die;
pub mod apply;
pub mod roll;

pub use regime::{classify, winner, Regime};
pub use die::{moves_for_die, DieMoves};
pub use apply::{apply_move, apply_move_roll};
pub use roll::{expand_roll, moves_for_roll};

/// Every distinct legal move roll for `dice` in `pos`.
///
/// Alias of [`moves_for_roll`].
pub use roll::moves_for_roll as generate_move_rolls;
