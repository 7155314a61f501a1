//! Deterministic Simon rules shared by the runtime and every frontend.
//!
//! `simon-core` defines the canonical state ([`GameState`]), the rules that
//! grow and check the sequence ([`GameEngine`]), and the notifications those
//! rules emit ([`GameEvent`]). All state mutation flows through the engine;
//! the crate performs no I/O and keeps no clocks.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use config::FlashTiming;
pub use engine::GameEngine;
pub use env::{PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use event::{EventSink, GameEvent};
pub use state::{GamePhase, GameState, Move, StateError};
