//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker executes gameplay commands; the flash scheduler
//! turns flash requests into timed cues on its behalf.

mod flash;
mod simulation;

pub use flash::FlashScheduler;
pub use simulation::{Command, SimulationWorker};
