//! Simulation worker that owns the authoritative [`simon_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], executes them via
//! [`simon_core::GameEngine`], and publishes notifications to the EventBus.
//! Commands are handled one at a time and each runs to completion, so the
//! state never needs a lock.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, trace};

use simon_core::{EventSink, GameEngine, GameError, GameEvent, GameState, RngOracle};

use super::flash::FlashScheduler;
use crate::api::GameSnapshot;
use crate::config::SeedPolicy;
use crate::events::{Event, EventBus};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Reset the state and begin round 1. Replies with the new game generation.
    StartGame { reply: oneshot::Sender<u64> },
    /// Check one pad press against the sequence.
    SubmitMove {
        is_blue: bool,
        reply: oneshot::Sender<()>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Query the state tagged with the current game generation.
    Snapshot { reply: oneshot::Sender<GameSnapshot> },
    /// Stop the worker after cancelling pending flashes.
    Shutdown { reply: oneshot::Sender<()> },
}

/// Background task that processes gameplay commands.
pub struct SimulationWorker {
    state: GameState,
    rng: Box<dyn RngOracle>,
    seed: SeedPolicy,
    /// Generation of the current game. Zero until the first start.
    game: u64,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    flashes: FlashScheduler,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: GameState,
        rng: Box<dyn RngOracle>,
        seed: SeedPolicy,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        flashes: FlashScheduler,
    ) -> Self {
        debug!(
            round = state.round,
            phase = %state.phase,
            "SimulationWorker initialized"
        );

        Self {
            state,
            rng,
            seed,
            game: 0,
            command_rx,
            event_bus,
            flashes,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            if !self.handle_command(cmd) {
                break;
            }
        }

        self.flashes.cancel_all();
        info!(game = self.game, round = self.state.round, "SimulationWorker stopped");
    }

    /// Returns `false` when the worker should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::StartGame { reply } => {
                let game = self.start_game();
                if reply.send(game).is_err() {
                    debug!("StartGame reply channel closed (caller dropped)");
                }
            }
            Command::SubmitMove { is_blue, reply } => {
                self.submit_move(is_blue);
                if reply.send(()).is_err() {
                    debug!("SubmitMove reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                let snapshot = GameSnapshot {
                    game: self.game,
                    state: self.state.clone(),
                };
                if reply.send(snapshot).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown { reply } => {
                let _ = reply.send(());
                return false;
            }
        }
        true
    }

    fn start_game(&mut self) -> u64 {
        self.game += 1;
        self.flashes.reset(self.game);

        let seed = match self.seed {
            SeedPolicy::Random => rand::random(),
            SeedPolicy::Fixed(seed) => seed,
        };
        info!(game = self.game, seed, "Starting game");

        let mut sink = Publisher {
            game: self.game,
            event_bus: &self.event_bus,
            flashes: &mut self.flashes,
        };
        GameEngine::new(&mut self.state, self.rng.as_ref()).start_game(seed, &mut sink);

        self.check_invariants();
        self.game
    }

    fn submit_move(&mut self, is_blue: bool) {
        debug!(game = self.game, is_blue, progress = self.state.progress, "Move submitted");

        let mut sink = Publisher {
            game: self.game,
            event_bus: &self.event_bus,
            flashes: &mut self.flashes,
        };
        GameEngine::new(&mut self.state, self.rng.as_ref()).submit_move(is_blue, &mut sink);

        self.check_invariants();
    }

    fn check_invariants(&self) {
        if let Err(e) = self.state.validate() {
            error!(
                code = e.error_code(),
                severity = e.severity().as_str(),
                "Game state invariant violated: {}",
                e
            );
            debug_assert!(false, "game state invariant violated: {e}");
        }
    }
}

/// Forwards engine notifications to the bus and the flash scheduler.
struct Publisher<'a> {
    game: u64,
    event_bus: &'a EventBus,
    flashes: &'a mut FlashScheduler,
}

impl EventSink for Publisher<'_> {
    fn emit(&mut self, event: GameEvent) {
        trace!(game = self.game, event = event.name(), "Publishing notification");

        match event {
            GameEvent::RoundStarted { round } => {
                info!(game = self.game, round, "Round started");
            }
            GameEvent::PlayerLost => {
                info!(game = self.game, "Player lost");
            }
            _ => {}
        }

        self.event_bus.publish(Event::Game {
            game: self.game,
            event,
        });

        if let GameEvent::FlashRequested {
            mv,
            index,
            total_rounds,
        } = event
        {
            self.flashes.schedule(mv, index, total_rounds);
        }
    }
}
