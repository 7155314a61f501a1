//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the game.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use simon_core::{GameState, PcgRng, RngOracle};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::config::RuntimeConfig;
use crate::events::EventBus;
use crate::workers::{Command, FlashScheduler, SimulationWorker};

/// Main runtime that hosts the game.
///
/// Design: Runtime owns the worker task and the only [`GameState`].
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Pending flash cues are cancelled. Handles cloned earlier start failing
    /// with [`RuntimeError::CommandChannelClosed`].
    pub async fn shutdown(self) -> Result<()> {
        match self.handle.shutdown().await {
            Ok(()) => {}
            // Worker already gone; joining below reports why.
            Err(RuntimeError::CommandChannelClosed | RuntimeError::ReplyChannelClosed(_)) => {}
            Err(e) => return Err(e),
        }

        self.worker.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state (defaults to a never-started game)
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Replace the move generator (defaults to [`PcgRng`])
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidInitialState`] if the state passed to
    /// [`RuntimeBuilder::initial_state`] breaks the game invariants.
    pub async fn build(self) -> Result<Runtime> {
        let RuntimeBuilder { config, state, rng } = self;

        if let Some(state) = &state {
            state.validate().map_err(RuntimeError::InvalidInitialState)?;
        }

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let flashes = FlashScheduler::new(config.flash_timing, event_bus.clone());
        let worker = SimulationWorker::new(
            state.unwrap_or_default(),
            rng.unwrap_or_else(|| Box::new(PcgRng)),
            config.seed,
            command_rx,
            event_bus,
            flashes,
        );

        let worker = tokio::spawn(async move {
            worker.run().await;
        });

        tracing::debug!(
            seed = ?config.seed,
            base_ms = config.flash_timing.base_interval.as_millis() as u64,
            min_ms = config.flash_timing.min_interval.as_millis() as u64,
            decay = config.flash_timing.decay,
            "Runtime built"
        );

        Ok(Runtime { handle, worker })
    }
}
