//! Notifications emitted by the engine.
//!
//! Each notification is a discrete event, not a queryable property. The engine
//! pushes them into an [`EventSink`] in the exact order state changes happen;
//! consumers must not reorder them.

use crate::state::Move;

/// A single state-change notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// The round counter advanced.
    RoundCountChanged { total_rounds: u32 },

    /// The move at `index` should be flashed. Converting `(index, total_rounds)`
    /// into a display delay is up to the consumer (see [`crate::FlashTiming`]).
    FlashRequested {
        mv: Move,
        index: u32,
        total_rounds: u32,
    },

    /// Player's progress within the current round.
    ProgressChanged { matched: u32, total_rounds: u32 },

    /// A new round's setup is complete.
    RoundStarted { round: u32 },

    /// Terminal failure: the player pressed the wrong pad.
    PlayerLost,
}

impl GameEvent {
    /// Short stable name, handy for logs and metrics labels.
    pub const fn name(&self) -> &'static str {
        match self {
            GameEvent::RoundCountChanged { .. } => "round_count_changed",
            GameEvent::FlashRequested { .. } => "flash_requested",
            GameEvent::ProgressChanged { .. } => "progress_changed",
            GameEvent::RoundStarted { .. } => "round_started",
            GameEvent::PlayerLost => "player_lost",
        }
    }
}

/// Observer receiving engine notifications.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}
