//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, event handling, and the board view-model that both
//! the CLI and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{BoardStatus, BoardView};
