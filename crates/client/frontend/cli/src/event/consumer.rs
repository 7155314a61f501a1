//! Maintains the board view and message log in response to runtime events.
use simon_core::GameEvent;
use simon_runtime::{Event, GameSnapshot};

use client_frontend_core::{
    MessageConfig,
    event::{EventConsumer, EventImpact},
    message::{MessageEntry, MessageLevel, MessageLog},
    view_model::BoardView,
};

pub struct CliEventConsumer {
    log: MessageLog,
    board: BoardView,
    config: MessageConfig,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, config: MessageConfig) -> Self {
        Self {
            log,
            board: BoardView::new(),
            config,
        }
    }

    pub fn board(&self) -> &BoardView {
        &self.board
    }

    /// Rebuild the board after the event stream skipped notifications.
    pub fn resync(&mut self, snapshot: &GameSnapshot, skipped: u64) -> EventImpact {
        self.log.push(MessageEntry::new(
            format!("Display fell behind by {skipped} events; resynced."),
            Some(snapshot.state.round).filter(|r| *r > 0),
            MessageLevel::Warning,
        ));
        self.board.sync(snapshot)
    }

    fn push(&mut self, text: String, round: Option<u32>, level: MessageLevel) -> EventImpact {
        self.log.push(MessageEntry::new(text, round, level));
        EventImpact::redraw()
    }

    fn on_game_event(&mut self, game: u64, event: &GameEvent) -> EventImpact {
        let round = Some(self.board.round()).filter(|r| *r > 0);

        match *event {
            GameEvent::RoundStarted { round: 1 } => self.push(
                format!("Game {game} started. Watch the sequence."),
                Some(1),
                MessageLevel::Info,
            ),
            GameEvent::RoundStarted { round } => self.push(
                format!("Round {round}. Watch the sequence."),
                Some(round),
                MessageLevel::Info,
            ),
            GameEvent::PlayerLost if game == 0 => self.push(
                "No game running. Press s to start.".to_string(),
                None,
                MessageLevel::Warning,
            ),
            GameEvent::PlayerLost => self.push(
                format!("Wrong pad! You lose at round {}.", self.board.round()),
                round,
                MessageLevel::Error,
            ),
            GameEvent::ProgressChanged {
                matched,
                total_rounds,
            } if self.config.show_progress && matched > 0 => self.push(
                format!("{matched}/{total_rounds} correct"),
                round,
                MessageLevel::Info,
            ),
            _ => EventImpact::none(),
        }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        // Stale events never reach the board or the log.
        if event.game() < self.board.game() {
            return EventImpact::none();
        }

        let impact = self.board.apply(event);

        let logged = match event {
            Event::Game { game, event } => self.on_game_event(*game, event),
            Event::Flash(cue) if self.config.show_flashes && cue.lit && impact.requires_redraw => {
                self.push(
                    format!("Flash {}: {}", cue.index + 1, cue.mv),
                    Some(cue.round),
                    MessageLevel::Info,
                )
            }
            Event::Flash(_) => EventImpact::none(),
        };

        impact.combine(logged)
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }
}
