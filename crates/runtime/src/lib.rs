//! Runtime orchestration for Simon.
//!
//! This crate owns the single [`simon_core::GameState`] instance inside a
//! simulation worker, serializes the two inbound operations through a command
//! channel, and fans out the engine's notifications on a topic-based event
//! bus. Consumers embed [`Runtime`] and talk to it through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`config`] loads runtime settings from the environment
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{GameSnapshot, Result, RuntimeError, RuntimeHandle};
pub use config::{RuntimeConfig, SeedPolicy};
pub use events::{Event, EventBus, FlashCue, Topic};
pub use runtime::{Runtime, RuntimeBuilder};
