//! Board view-model derived from runtime events.
//!
//! [`BoardView`] is everything a frontend needs to draw the two pads, the
//! status line and the progress gauge. It never talks to the runtime; feed it
//! events in the order they arrive and read the accessors.
use simon_core::{GameEvent, GamePhase, Move};
use simon_runtime::{Event, FlashCue, GameSnapshot};

use crate::event::EventImpact;

/// What the status line shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardStatus {
    #[default]
    Idle,
    Playing {
        round: u32,
    },
    Lost,
}

impl BoardStatus {
    pub fn text(&self) -> String {
        match self {
            Self::Idle => "Press start".to_string(),
            Self::Playing { round } => format!("Round: {round}"),
            Self::Lost => "You Lose!".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BoardView {
    game: u64,
    status: BoardStatus,
    round: u32,
    matched: u32,
    total: u32,
    lit: Option<Move>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a runtime event. Events from an older game are dropped.
    pub fn apply(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Game { game, event } => self.apply_game(*game, event),
            Event::Flash(cue) => self.apply_flash(cue),
        }
    }

    /// Rebuild the view from a runtime snapshot.
    ///
    /// Used after the event stream dropped notifications. Any lit pad is
    /// cleared; cues of the current round light it again.
    pub fn sync(&mut self, snapshot: &GameSnapshot) -> EventImpact {
        let state = &snapshot.state;

        self.game = snapshot.game;
        self.round = state.round;
        self.total = state.round;
        self.matched = state.progress;
        self.status = match state.phase {
            GamePhase::NotStarted => BoardStatus::Idle,
            GamePhase::AwaitingInput => BoardStatus::Playing { round: state.round },
            GamePhase::Lost => BoardStatus::Lost,
        };
        self.lit = None;

        EventImpact::redraw()
    }

    fn apply_game(&mut self, game: u64, event: &GameEvent) -> EventImpact {
        if game < self.game {
            return EventImpact::none();
        }
        if game > self.game {
            self.game = game;
            self.lit = None;
        }

        match *event {
            GameEvent::RoundCountChanged { total_rounds } => {
                self.round = total_rounds;
                self.total = total_rounds;
            }
            GameEvent::ProgressChanged {
                matched,
                total_rounds,
            } => {
                self.matched = matched;
                self.total = total_rounds;
            }
            GameEvent::RoundStarted { round } => {
                self.round = round;
                self.status = BoardStatus::Playing { round };
                self.lit = None;
            }
            // The replay is drawn from timed cues, not from the request.
            GameEvent::FlashRequested { .. } => return EventImpact::none(),
            GameEvent::PlayerLost => {
                self.status = BoardStatus::Lost;
                self.lit = None;
            }
        }

        EventImpact::redraw()
    }

    fn apply_flash(&mut self, cue: &FlashCue) -> EventImpact {
        let current = matches!(self.status, BoardStatus::Playing { .. })
            && cue.game == self.game
            && cue.round == self.round;
        if !current {
            return EventImpact::none();
        }

        let before = self.lit;
        if cue.lit {
            self.lit = Some(cue.mv);
        } else if self.lit == Some(cue.mv) {
            self.lit = None;
        }

        if before == self.lit {
            EventImpact::none()
        } else {
            EventImpact::redraw()
        }
    }

    pub fn game(&self) -> u64 {
        self.game
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    pub fn status_text(&self) -> String {
        self.status.text()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn matched(&self) -> u32 {
        self.matched
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whole-number percentage of the current round reproduced so far.
    pub fn progress_percent(&self) -> u16 {
        if self.total == 0 {
            return 0;
        }
        let percent = u64::from(self.matched) * 100 / u64::from(self.total);
        percent.min(100) as u16
    }

    pub fn lit(&self) -> Option<Move> {
        self.lit
    }

    pub fn is_lit(&self, mv: Move) -> bool {
        self.lit == Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simon_core::GameState;

    fn game(game: u64, event: GameEvent) -> Event {
        Event::Game { game, event }
    }

    fn cue(game: u64, round: u32, mv: Move, lit: bool) -> Event {
        Event::Flash(FlashCue {
            game,
            round,
            index: 0,
            mv,
            lit,
        })
    }

    fn start_round(view: &mut BoardView, generation: u64, round: u32) {
        view.apply(&game(generation, GameEvent::RoundCountChanged { total_rounds: round }));
        view.apply(&game(
            generation,
            GameEvent::ProgressChanged {
                matched: 0,
                total_rounds: round,
            },
        ));
        view.apply(&game(generation, GameEvent::RoundStarted { round }));
    }

    #[test]
    fn fresh_board_asks_to_start() {
        let view = BoardView::new();
        assert_eq!(view.status_text(), "Press start");
        assert_eq!(view.progress_percent(), 0);
        assert_eq!(view.lit(), None);
    }

    #[test]
    fn round_start_updates_status_and_progress() {
        let mut view = BoardView::new();
        start_round(&mut view, 1, 1);

        assert_eq!(view.status_text(), "Round: 1");
        assert_eq!(view.progress_percent(), 0);
        assert_eq!(view.game(), 1);
    }

    #[test]
    fn progress_percent_truncates() {
        let mut view = BoardView::new();
        start_round(&mut view, 1, 3);
        view.apply(&game(
            1,
            GameEvent::ProgressChanged {
                matched: 2,
                total_rounds: 3,
            },
        ));

        assert_eq!(view.progress_percent(), 66);
    }

    #[test]
    fn loss_shows_message_and_darkens_pads() {
        let mut view = BoardView::new();
        start_round(&mut view, 1, 2);
        view.apply(&cue(1, 2, Move::Red, true));
        assert!(view.is_lit(Move::Red));

        let impact = view.apply(&game(1, GameEvent::PlayerLost));

        assert!(impact.requires_redraw);
        assert_eq!(view.status_text(), "You Lose!");
        assert_eq!(view.lit(), None);
        assert_eq!(view.apply(&cue(1, 2, Move::Blue, true)), EventImpact::none());
    }

    #[test]
    fn flash_cues_light_then_release_the_pad() {
        let mut view = BoardView::new();
        start_round(&mut view, 1, 1);

        assert!(view.apply(&cue(1, 1, Move::Blue, true)).requires_redraw);
        assert!(view.is_lit(Move::Blue));
        assert!(!view.is_lit(Move::Red));

        assert!(view.apply(&cue(1, 1, Move::Blue, false)).requires_redraw);
        assert_eq!(view.lit(), None);
    }

    #[test]
    fn unlit_cue_for_other_pad_is_ignored() {
        let mut view = BoardView::new();
        start_round(&mut view, 1, 2);
        view.apply(&cue(1, 2, Move::Blue, true));

        assert_eq!(view.apply(&cue(1, 2, Move::Red, false)), EventImpact::none());
        assert!(view.is_lit(Move::Blue));
    }

    #[test]
    fn stale_game_and_round_cues_are_dropped() {
        let mut view = BoardView::new();
        start_round(&mut view, 1, 1);
        start_round(&mut view, 2, 1);

        assert_eq!(view.apply(&cue(1, 1, Move::Red, true)), EventImpact::none());
        assert_eq!(
            view.apply(&game(1, GameEvent::PlayerLost)),
            EventImpact::none()
        );
        assert_eq!(view.status_text(), "Round: 1");

        start_round(&mut view, 2, 2);
        assert_eq!(view.apply(&cue(2, 1, Move::Red, true)), EventImpact::none());
        assert_eq!(view.lit(), None);
    }

    #[test]
    fn sync_jumps_to_snapshot_round() {
        let mut view = BoardView::new();
        start_round(&mut view, 1, 3);
        view.apply(&cue(1, 3, Move::Red, true));

        let snapshot = GameSnapshot {
            game: 1,
            state: GameState {
                round: 7,
                sequence: vec![Move::Blue; 7],
                progress: 2,
                phase: GamePhase::AwaitingInput,
                ..GameState::default()
            },
        };
        assert!(view.sync(&snapshot).requires_redraw);

        assert_eq!(view.status_text(), "Round: 7");
        assert_eq!(view.progress_percent(), 28);
        assert_eq!(view.lit(), None);
        assert!(view.apply(&cue(1, 7, Move::Blue, true)).requires_redraw);
        assert_eq!(view.apply(&cue(1, 3, Move::Red, true)), EventImpact::none());
    }

    #[test]
    fn sync_maps_phases_to_status() {
        let mut view = BoardView::new();
        let mut snapshot = GameSnapshot {
            game: 0,
            state: GameState::default(),
        };
        view.sync(&snapshot);
        assert_eq!(view.status(), BoardStatus::Idle);

        snapshot.game = 4;
        snapshot.state.phase = GamePhase::Lost;
        view.sync(&snapshot);
        assert_eq!(view.status_text(), "You Lose!");
        assert_eq!(view.game(), 4);
    }

    #[test]
    fn flash_requests_do_not_redraw() {
        let mut view = BoardView::new();
        let impact = view.apply(&game(
            1,
            GameEvent::FlashRequested {
                mv: Move::Red,
                index: 0,
                total_rounds: 1,
            },
        ));
        assert_eq!(impact, EventImpact::none());
    }
}
