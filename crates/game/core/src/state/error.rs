//! State invariant errors.

use crate::error::{ErrorSeverity, GameError};

/// Invariant violations detected by [`super::GameState::validate`].
///
/// The engine never produces these on its own; they exist so the runtime can
/// check the state after every operation and report corruption loudly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// The player has matched more moves than the sequence holds.
    #[error("progress {progress} exceeds sequence length {len}")]
    ProgressOutOfRange {
        /// Current progress counter.
        progress: u32,
        /// Current sequence length.
        len: usize,
    },

    /// A started game must carry exactly one move per round.
    #[error("sequence length {len} does not match round {round}")]
    SequenceLengthMismatch {
        /// Current round counter.
        round: u32,
        /// Current sequence length.
        len: usize,
    },

    /// A game that was never started must be empty.
    #[error("state is not started but holds round {round} with {len} moves")]
    NotStartedButPopulated {
        /// Current round counter.
        round: u32,
        /// Current sequence length.
        len: usize,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            ProgressOutOfRange { .. } => ErrorSeverity::Internal,
            SequenceLengthMismatch { .. } | NotStartedButPopulated { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            ProgressOutOfRange { .. } => "STATE_PROGRESS_OUT_OF_RANGE",
            SequenceLengthMismatch { .. } => "STATE_SEQUENCE_LENGTH_MISMATCH",
            NotStartedButPopulated { .. } => "STATE_NOT_STARTED_BUT_POPULATED",
        }
    }
}
