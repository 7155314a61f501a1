//! Point-in-time copy of the worker's state.
use serde::{Deserialize, Serialize};
use simon_core::GameState;

/// The game state together with the generation it belongs to.
///
/// Consumers that fell behind the event bus rebuild their view from this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Generation of the current game, 0 before the first start.
    pub game: u64,
    pub state: GameState,
}
