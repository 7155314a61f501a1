//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use simon_runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{EventConsumer, FrontendConfig, frontend::Frontend, message::MessageLog};

/// Terminal frontend. Owns UI configuration only; the runtime is reached
/// through the handle passed to [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI client starting...");

        // Subscribe before anything can publish so no notification is missed.
        let subscriptions = handle.subscribe_multiple(&[Topic::Game, Topic::Flash]);

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Welcome to Simon. Press s to start.");

        let consumer = CliEventConsumer::new(messages, self.frontend_config.messages.clone());
        let event_loop = EventLoop::new(subscriptions, handle, consumer, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            messages = consumer.message_log().len(),
            "CLI client exiting"
        );

        Ok(())
    }
}
