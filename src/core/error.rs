//! Recoverable engine errors.
//!
//! Only input crossing the crate boundary can fail: dice values, positions
//! decoded from their transport form, and move rolls submitted to a game.
//! Broken preconditions inside the rules layer panic instead.

use thiserror::Error;

use super::side::Side;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("die value {0} is out of range (1-6)")]
    InvalidDie(u8),
    #[error("invalid position: {0}")]
    InvalidPosition(String),
    #[error("{side} has {count} checkers on the board, at most 15 allowed")]
    TooManyCheckers { side: Side, count: usize },
    #[error("failed to decode position: {0}")]
    Decode(#[from] bincode::Error),
    #[error("move roll is not legal for the current position and dice")]
    IllegalMoveRoll,
    #[error("game is already over, {winner} won")]
    GameOver { winner: Side },
}
