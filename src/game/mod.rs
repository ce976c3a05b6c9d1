//! Playing whole games.
//!
//! A [`Game`] owns the board, the dice and the move history. Players are
//! [`Strategy`] implementations: anything that picks one of the legal rolls
//! for a position and a throw.
//!
//! ## Usage
//!
//! ```rust
//! use rust_backgammon::core::{Side, SideMap};
//! use rust_backgammon::game::{Game, RandomStrategy, Strategy};
//!
//! let mut game = Game::new(7, Side::First);
//! let mut players: SideMap<Box<dyn Strategy>> =
//!     SideMap::new(|side| Box::new(RandomStrategy::new(side.index() as u64)) as Box<dyn Strategy>);
//!
//! let winner = game.play_to_end(&mut players, 2_000).unwrap();
//! assert_eq!(winner, game.winner());
//! ```

pub mod driver;
pub mod strategy;

pub use driver::{Game, GameCheckpoint, TurnRecord};
pub use strategy::{MinimaxStrategy, RandomStrategy, Strategy};
