//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for the
//! two player operations, state queries, and topic subscriptions.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use simon_core::{GameState, Move};

use super::errors::{Result, RuntimeError};
use super::snapshot::GameSnapshot;
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Start a new game, abandoning any game in progress.
    ///
    /// Returns the generation number of the new game. Every event published
    /// for this game carries the same number. All notifications for round 1
    /// have been published by the time this resolves.
    pub async fn start_game(&self) -> Result<u64> {
        self.request(|reply| Command::StartGame { reply }).await
    }

    /// Forward a pad press. `true` is BLUE, `false` is RED.
    ///
    /// The outcome is only reported through [`Topic::Game`] notifications.
    pub async fn submit_move(&self, is_blue: bool) -> Result<()> {
        self.request(|reply| Command::SubmitMove { is_blue, reply })
            .await
    }

    /// Convenience wrapper over [`RuntimeHandle::submit_move`].
    pub async fn press(&self, mv: Move) -> Result<()> {
        self.submit_move(mv.is_blue()).await
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Query the state together with the current game generation.
    ///
    /// Use this to resynchronize after a subscriber lagged behind the bus.
    pub async fn snapshot(&self) -> Result<GameSnapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Ask the worker to stop. Pending flash timers are cancelled.
    pub async fn shutdown(&self) -> Result<()> {
        self.request(|reply| Command::Shutdown { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Game` - Engine notifications, in emission order
    /// - `Topic::Flash` - Timed flash cues for the replay
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use simon_runtime::Topic;
    ///
    /// let mut game_rx = handle.subscribe(Topic::Game);
    /// while let Ok(event) = game_rx.recv().await {
    ///     // Handle game notifications
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
