//! Alpha-beta minimax search over move rolls.
//!
//! ## Overview
//!
//! Backgammon has chance nodes, but this search deliberately ignores them:
//! below the root every dice pair is treated as available, so a node's
//! children are all positions reachable with any throw. This overestimates
//! both sides' options equally and keeps the tree a plain minimax tree,
//! which alpha-beta can prune.
//!
//! - **Seeded ordering**: children are shuffled with a ChaCha8 RNG reseeded
//!   from `SearchConfig::seed` on every search, so results are reproducible
//! - **Branch cap**: only the first `branch_cap` shuffled children are
//!   searched; `None` searches all of them
//! - **Forced passes**: a node with no legal roll passes the turn and costs
//!   a ply
//!
//! ## Usage
//!
//! ```rust
//! use rust_backgammon::core::{DiePair, Position, Side};
//! use rust_backgammon::search::{Minimax, SearchConfig};
//!
//! let pos = Position::starting(Side::First);
//! let dice = DiePair::new(3, 1).unwrap();
//!
//! let mut search = Minimax::new(SearchConfig::default().with_seed(11));
//! let roll = search.search(&pos, 1, Side::First, dice);
//!
//! assert_eq!(roll.len(), 2);
//! println!("played {roll}, {} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::{SearchConfig, DEFAULT_BRANCH_CAP};
pub use minimax::{search, Minimax};
pub use stats::SearchStats;
