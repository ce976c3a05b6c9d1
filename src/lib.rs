//! # rust-backgammon
//!
//! Backgammon move generation and a depth-limited alpha-beta search.
//!
//! ## Design Principles
//!
//! 1. **Values, not mutation**: `Position` is a small `Copy` value. Applying a
//!    move returns a new position, so generators and the search never undo.
//!
//! 2. **Exact dedup**: move rolls are deduplicated by the full structural
//!    equality of the resulting position, never by a lossy key.
//!
//! 3. **Deterministic**: every source of randomness is a seeded ChaCha8 RNG.
//!    The same seed, position and dice always give the same answer.
//!
//! ## Board Geometry
//!
//! Points 0..24 are the playing surface. `Side::First` moves toward 0 and
//! bears off from points 0..6; `Side::Second` moves toward 23 and bears off
//! from 18..24. Index 24 is Second's bar, 25 is First's bar and
//! [`BEAR_OFF`](core::BEAR_OFF) is the bear-off sentinel used as a move
//! target.
//!
//! ## Modules
//!
//! - `core`: sides, positions, moves, dice, RNG, errors
//! - `rules`: regime classification, single-die moves, move application,
//!   move-roll generation
//! - `eval`: static evaluation behind the `Evaluator` trait
//! - `search`: alpha-beta minimax over move rolls
//! - `game`: game driver and strategies

pub mod core;
pub mod rules;
pub mod eval;
pub mod search;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    Point, PointIndex, Position, BEAR_OFF, CHECKERS_PER_SIDE,
    DiePair, Move, MoveKind, MoveRoll,
    GameRng, GameRngState,
    Error, Result,
};

pub use crate::rules::{
    apply_move, apply_move_roll, classify, generate_move_rolls, moves_for_die, moves_for_roll,
    winner, Regime,
};

pub use crate::eval::{evaluate, pip_count, EvalWeights, Evaluator, HeuristicEvaluator};

pub use crate::search::{search, Minimax, SearchConfig, SearchStats};

pub use crate::game::{
    Game, GameCheckpoint, MinimaxStrategy, RandomStrategy, Strategy, TurnRecord,
};
