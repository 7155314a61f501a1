//! Authoritative game state representation.
//!
//! Runtime layers clone or query this state but mutate it exclusively
//! through [`crate::GameEngine`].
mod error;
mod types;

pub use error::StateError;
pub use types::{GamePhase, Move};

/// Canonical snapshot of a Simon game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for the current game.
    ///
    /// Set on every game start and mixed with the round number to draw the
    /// move appended by that round.
    pub game_seed: u64,

    /// Number of sequence extensions since the last game start.
    pub round: u32,

    /// Target pattern for the current round. Grows by one move per round.
    pub sequence: Vec<Move>,

    /// Moves correctly reproduced so far in the current round.
    pub progress: u32,

    /// State machine position.
    pub phase: GamePhase,
}

impl GameState {
    /// Creates an empty state that has never seen a game start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the move the player must press next, if any.
    pub fn expected_move(&self) -> Option<Move> {
        self.sequence.get(self.progress as usize).copied()
    }

    /// Number of moves still to reproduce in the current round.
    pub fn remaining(&self) -> usize {
        self.sequence.len().saturating_sub(self.progress as usize)
    }

    pub fn is_lost(&self) -> bool {
        self.phase.is_lost()
    }

    /// Checks the structural invariants of the state.
    ///
    /// - `progress <= len(sequence)`
    /// - `len(sequence) == round`
    /// - a never-started game is empty
    pub fn validate(&self) -> Result<(), StateError> {
        let len = self.sequence.len();

        if self.phase == GamePhase::NotStarted && (self.round != 0 || len != 0) {
            return Err(StateError::NotStartedButPopulated {
                round: self.round,
                len,
            });
        }

        if self.progress as usize > len {
            return Err(StateError::ProgressOutOfRange {
                progress: self.progress,
                len,
            });
        }

        if len != self.round as usize {
            return Err(StateError::SequenceLengthMismatch {
                round: self.round,
                len,
            });
        }

        Ok(())
    }

    /// Clears everything a new game must not inherit.
    pub(crate) fn reset(&mut self, game_seed: u64) {
        self.game_seed = game_seed;
        self.round = 0;
        self.sequence.clear();
        self.progress = 0;
    }
}
