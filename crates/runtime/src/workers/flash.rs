//! One-shot timers that replay the sequence as timed flash cues.
//!
//! Every `FlashRequested` notification becomes a small task that sleeps until
//! the flash onset, publishes a lit cue, sleeps for the hold time, and
//! publishes the matching unlit cue. Timers belong to one game generation and
//! are aborted when the next game starts.

use simon_core::{FlashTiming, Move};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::events::{Event, EventBus, FlashCue};

pub struct FlashScheduler {
    timing: FlashTiming,
    event_bus: EventBus,
    game: u64,
    pending: Vec<JoinHandle<()>>,
}

impl FlashScheduler {
    pub fn new(timing: FlashTiming, event_bus: EventBus) -> Self {
        Self {
            timing,
            event_bus,
            game: 0,
            pending: Vec::new(),
        }
    }

    /// Cancels every timer of the previous game and adopts `game`.
    pub fn reset(&mut self, game: u64) {
        let cancelled = self.cancel_all();
        if cancelled > 0 {
            debug!(
                previous = self.game,
                cancelled, "Cancelled pending flashes from previous game"
            );
        }
        self.game = game;
    }

    /// Schedules the lit/unlit cue pair for one move of the replay.
    pub fn schedule(&mut self, mv: Move, index: u32, round: u32) {
        self.pending.retain(|task| !task.is_finished());

        let onset = self.timing.onset(index, round);
        let hold = self.timing.hold(round);
        let event_bus = self.event_bus.clone();
        let cue = FlashCue {
            game: self.game,
            round,
            index,
            mv,
            lit: true,
        };

        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(onset).await;
            event_bus.publish(Event::Flash(cue));
            tokio::time::sleep(hold).await;
            event_bus.publish(Event::Flash(FlashCue { lit: false, ..cue }));
        }));
    }

    /// Aborts all timers that have not fired yet. Returns how many were live.
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled = 0;
        for task in self.pending.drain(..) {
            if !task.is_finished() {
                task.abort();
                cancelled += 1;
            }
        }
        cancelled
    }

    /// Number of timers that have not completed.
    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|task| !task.is_finished()).count()
    }
}

impl Drop for FlashScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
