//! Event payloads that only exist at the runtime layer.

use serde::{Deserialize, Serialize};
use simon_core::Move;

/// A timed instruction to light or unlight a pad during the replay.
///
/// Produced by the flash scheduler from `FlashRequested` notifications once
/// the delay computed by [`simon_core::FlashTiming`] has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashCue {
    /// Game generation the cue belongs to.
    pub game: u64,
    /// Round whose replay scheduled the cue.
    pub round: u32,
    /// Position of the flashed move in the sequence.
    pub index: u32,
    /// Pad to light.
    pub mv: Move,
    /// `true` when the pad lights up, `false` when it reverts.
    pub lit: bool,
}
