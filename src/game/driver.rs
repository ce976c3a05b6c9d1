//! Game driver: dice, turn order, legality checks and history.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    DiePair, Error, GameRng, GameRngState, MoveRoll, Position, Result, Side, SideMap,
    MAX_MOVES_PER_ROLL,
};
use crate::rules::{apply_move, expand_roll, moves_for_die, winner};

use super::strategy::Strategy;

/// One completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 0.
    pub turn: u32,
    /// Side that moved.
    pub side: Side,
    /// Dice thrown.
    pub dice: DiePair,
    /// Roll played; empty for a forced pass.
    pub roll: MoveRoll,
}

/// Everything needed to resume a game exactly where it stopped, dice
/// stream included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCheckpoint {
    pub position: Position,
    pub turn: u32,
    pub rng: GameRngState,
    pub history: Vector<TurnRecord>,
}

/// A game in progress.
///
/// Cloning is cheap: the history is a persistent vector, so snapshots for
/// analysis or replay share structure with the live game.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    rng: GameRng,
    turn: u32,
    history: Vector<TurnRecord>,
}

impl Game {
    /// Start from the standard layout with `first` on roll.
    #[must_use]
    pub fn new(seed: u64, first: Side) -> Self {
        Self {
            position: Position::starting(first),
            rng: GameRng::new(seed),
            turn: 0,
            history: Vector::new(),
        }
    }

    /// Start from an arbitrary position after validating it.
    pub fn from_position(position: Position, seed: u64) -> Result<Self> {
        position.validate()?;
        Ok(Self {
            position,
            rng: GameRng::new(seed),
            turn: 0,
            history: Vector::new(),
        })
    }

    /// Capture the game, including the dice stream position.
    #[must_use]
    pub fn checkpoint(&self) -> GameCheckpoint {
        GameCheckpoint {
            position: self.position,
            turn: self.turn,
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Resume from a checkpoint. The dice continue exactly as they would
    /// have in the checkpointed game.
    pub fn restore(checkpoint: GameCheckpoint) -> Result<Self> {
        checkpoint.position.validate()?;
        Ok(Self {
            position: checkpoint.position,
            rng: GameRng::from_state(&checkpoint.rng),
            turn: checkpoint.turn,
            history: checkpoint.history,
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Number of turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    pub fn side_to_move(&self) -> Side {
        self.position.side_to_move()
    }

    /// The side that has borne off every checker, if any.
    pub fn winner(&self) -> Option<Side> {
        winner(&self.position)
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// An independent stream derived from the game seed, for seeding
    /// players. Does not disturb the dice sequence.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    /// Throw the dice for the side to move.
    pub fn roll_dice(&mut self) -> DiePair {
        self.rng.roll_dice()
    }

    /// Throw the dice, let `strategy` pick a roll and play it.
    pub fn play_turn(&mut self, strategy: &mut dyn Strategy) -> Result<TurnRecord> {
        self.ensure_not_over()?;
        let dice = self.roll_dice();
        let roll = strategy.choose(&self.position, dice);
        debug!(
            "turn {}: {} ({}) rolled {dice}, plays {roll}",
            self.turn,
            self.side_to_move(),
            strategy.name()
        );
        self.play_turn_with_dice(dice, roll)
    }

    /// Play `roll` for externally thrown `dice`.
    ///
    /// The roll must use as many dice as the position allows. Any order of
    /// the dice is accepted, as is a transposition of a generated roll. An
    /// empty roll is accepted only when no move is possible. On error the
    /// game is left unchanged.
    pub fn play_turn_with_dice(&mut self, dice: DiePair, roll: MoveRoll) -> Result<TurnRecord> {
        self.ensure_not_over()?;

        let end = self.check_roll(dice, &roll)?;
        let record = TurnRecord {
            turn: self.turn,
            side: self.side_to_move(),
            dice,
            roll,
        };

        self.position = end.flip_turn();
        self.turn += 1;
        self.history.push_back(record.clone());

        if let Some(side) = self.winner() {
            debug!("{side} wins after {} turns", self.turn);
        }
        Ok(record)
    }

    /// Play until one side wins or `max_turns` more turns have been played.
    ///
    /// Returns the winner, or `None` if the turn limit was hit first.
    pub fn play_to_end(
        &mut self,
        strategies: &mut SideMap<Box<dyn Strategy>>,
        max_turns: u32,
    ) -> Result<Option<Side>> {
        for _ in 0..max_turns {
            if self.is_over() {
                break;
            }
            let side = self.side_to_move();
            self.play_turn(&mut *strategies[side])?;
        }
        Ok(self.winner())
    }

    fn ensure_not_over(&self) -> Result<()> {
        match self.winner() {
            Some(winner) => Err(Error::GameOver { winner }),
            None => Ok(()),
        }
    }

    /// Replay `roll` move by move against the remaining dice and return the
    /// final position if it is one of the legal outcomes.
    fn check_roll(&self, dice: DiePair, roll: &MoveRoll) -> Result<Position> {
        let legal = expand_roll(&self.position, dice);
        let Some((longest, _)) = legal.first() else {
            return if roll.is_empty() {
                Ok(self.position)
            } else {
                Err(Error::IllegalMoveRoll)
            };
        };
        if roll.len() != longest.len() {
            return Err(Error::IllegalMoveRoll);
        }

        let mut remaining: SmallVec<[u8; MAX_MOVES_PER_ROLL]> = if dice.is_double() {
            SmallVec::from_elem(dice.first(), MAX_MOVES_PER_ROLL)
        } else {
            SmallVec::from_slice(&[dice.first(), dice.second()])
        };

        let mut pos = self.position;
        for &mv in roll {
            let used = remaining
                .iter()
                .position(|&die| moves_for_die(&pos, die).contains(&mv))
                .ok_or(Error::IllegalMoveRoll)?;
            remaining.remove(used);
            pos = apply_move(&pos, mv);
        }

        if legal.iter().any(|(_, end)| *end == pos) {
            Ok(pos)
        } else {
            Err(Error::IllegalMoveRoll)
        }
    }
}
