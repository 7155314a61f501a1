//! Value types stored in [`super::GameState`].

/// One element of the target sequence, and one of the two player inputs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Red,
    Blue,
}

impl Move {
    /// Maps the boolean input of the two-pad control surface onto a move.
    ///
    /// `true` is the BLUE pad, `false` the RED pad.
    pub const fn from_is_blue(is_blue: bool) -> Self {
        if is_blue { Move::Blue } else { Move::Red }
    }

    pub const fn is_blue(self) -> bool {
        matches!(self, Move::Blue)
    }

    /// Converts a random roll into a move using its low bit.
    ///
    /// Even rolls are RED, odd rolls are BLUE, so a uniform `u32` yields each
    /// move with probability one half.
    pub const fn from_roll(roll: u32) -> Self {
        Self::from_is_blue(roll & 1 == 1)
    }
}

/// Position of the game in its state machine.
///
/// ```text
/// NotStarted ──start──▶ AwaitingInput ──wrong move──▶ Lost
///      │                  ▲        │                    │
///      └──submit──▶ Lost  └─correct┘                    │
///                         ▲                             │
///                         └──────────start──────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// No game has been started since the state was created.
    #[default]
    NotStarted,
    /// A round is set up and the player is reproducing the sequence.
    AwaitingInput,
    /// The player made a mistake. Only a new game leaves this phase.
    Lost,
}

impl GamePhase {
    pub const fn is_lost(self) -> bool {
        matches!(self, GamePhase::Lost)
    }
}
