//! Move-choosing strategies.

use crate::core::{DiePair, GameRng, MoveRoll, Position};
use crate::eval::Evaluator;
use crate::rules::moves_for_roll;
use crate::search::{Minimax, SearchConfig};

/// Picks a roll for the side to move.
///
/// Implementations must return one of the rolls produced by
/// [`moves_for_roll`] for the same position and dice, or an empty roll when
/// there are none. [`Game`](super::Game) rejects anything else.
pub trait Strategy {
    fn choose(&mut self, pos: &Position, dice: DiePair) -> MoveRoll;

    /// Short name for logs.
    fn name(&self) -> &str {
        "strategy"
    }
}

/// Plays the minimax search's choice at a fixed depth.
pub struct MinimaxStrategy {
    search: Minimax,
    depth: u32,
}

impl MinimaxStrategy {
    /// Search `config.depth` plies with the default evaluator.
    pub fn new(config: SearchConfig) -> Self {
        let depth = config.depth;
        Self {
            search: Minimax::new(config),
            depth,
        }
    }

    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.search = self.search.with_evaluator(evaluator);
        self
    }

    /// The underlying search, for its statistics.
    pub fn search(&self) -> &Minimax {
        &self.search
    }
}

impl Strategy for MinimaxStrategy {
    fn choose(&mut self, pos: &Position, dice: DiePair) -> MoveRoll {
        self.search.search(pos, self.depth, pos.side_to_move(), dice)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Plays a uniformly random legal roll.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Draw choices from an existing stream, e.g. one forked off a game.
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn choose(&mut self, pos: &Position, dice: DiePair) -> MoveRoll {
        let rolls = moves_for_roll(pos, dice);
        self.rng.choose(&rolls).cloned().unwrap_or_default()
    }

    fn name(&self) -> &str {
        "random"
    }
}
