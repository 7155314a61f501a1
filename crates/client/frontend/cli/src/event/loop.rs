//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Runtime event consumption (game notifications and flash cues)
//! - Keyboard input processing (start, pad presses, quit)
//! - Rendering the board when an event asks for it

use std::collections::HashMap;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use simon_runtime::{Event as RuntimeEvent, RuntimeHandle, Topic};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration},
};

use crate::{
    config::CliConfig,
    event::CliEventConsumer,
    input::{InputHandler, KeyAction},
    presentation::{terminal::Tui, ui},
};
use client_frontend_core::EventConsumer;

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop driving the terminal UI until the player quits.
pub struct EventLoop {
    pub(crate) subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    pub(crate) handle: RuntimeHandle,
    pub(crate) input: InputHandler,
    pub(crate) consumer: CliEventConsumer,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        handle: RuntimeHandle,
        consumer: CliEventConsumer,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            subscriptions,
            handle,
            input: InputHandler::new(),
            consumer,
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<CliEventConsumer> {
        self.render(terminal)?;

        let mut game_rx = self.subscriptions.remove(&Topic::Game);
        let mut flash_rx = self.subscriptions.remove(&Topic::Flash);

        loop {
            tokio::select! {
                Some(result) = recv(game_rx.as_mut()) => {
                    if self.handle_runtime_event(result, terminal).await? {
                        break;
                    }
                }
                Some(result) = recv(flash_rx.as_mut()) => {
                    if self.handle_runtime_event(result, terminal).await? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(self.consumer)
    }

    async fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&event);
                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                // Round setup may be among the dropped events.
                tracing::warn!("Dropped {} events, resyncing board", skipped);
                let snapshot = self.handle.snapshot().await?;
                self.consumer.resync(&snapshot, skipped);
                self.render(terminal)?;
                Ok(false)
            }
        }
    }

    /// Drain pending terminal input without blocking. Returns `true` on quit.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::ZERO)? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    match self.input.handle_key(key) {
                        KeyAction::Quit => return Ok(true),
                        KeyAction::Start => {
                            let game = self.handle.start_game().await?;
                            tracing::debug!(game, "Start requested");
                        }
                        KeyAction::Press(mv) => {
                            tracing::trace!(%mv, "Pad pressed");
                            self.handle.press(mv).await?;
                        }
                        KeyAction::None => {}
                    }
                }
                TermEvent::Resize(..) => self.render(terminal)?,
                _ => {}
            }
        }
        Ok(false)
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            board: self.consumer.board(),
            messages: self.consumer.message_log(),
            message_panel_height: self.cli_config.ui.message_panel_height,
        };
        ui::render(terminal, &ctx)
    }
}

/// Receive from an optional subscription; a missing topic never resolves.
async fn recv(
    rx: Option<&mut broadcast::Receiver<RuntimeEvent>>,
) -> Option<Result<RuntimeEvent, RecvError>> {
    match rx {
        Some(rx) => Some(rx.recv().await),
        None => std::future::pending().await,
    }
}
