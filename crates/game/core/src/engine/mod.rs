//! Round and sequence rules.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! state change is announced to an [`EventSink`] in the order it happens, so
//! a consumer replaying the notifications sees exactly what the state saw.

use crate::env::{RngOracle, compute_seed};
use crate::event::{EventSink, GameEvent};
use crate::state::{GamePhase, GameState, Move};

/// Game engine driving a borrowed [`GameState`].
///
/// The engine holds no state of its own; construct one per operation.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState, rng: &'a dyn RngOracle) -> Self {
        Self { state, rng }
    }

    /// Resets the state and begins round 1.
    ///
    /// Valid from every phase, including the middle of a running game.
    pub fn start_game(&mut self, game_seed: u64, sink: &mut dyn EventSink) {
        self.state.reset(game_seed);
        self.begin_round(sink);
    }

    /// Records a press of one of the two pads.
    ///
    /// A correct press advances progress and, once the whole sequence has been
    /// reproduced, begins the next round. Any other press (including one made
    /// before a game was started) loses the game. Presses after a loss are
    /// ignored until the next [`GameEngine::start_game`].
    pub fn submit_move(&mut self, is_blue: bool, sink: &mut dyn EventSink) {
        if self.state.phase.is_lost() {
            return;
        }

        let pressed = Move::from_is_blue(is_blue);

        match self.state.expected_move() {
            Some(expected) if expected == pressed => {
                self.state.progress += 1;
                sink.emit(GameEvent::ProgressChanged {
                    matched: self.state.progress,
                    total_rounds: self.state.round,
                });

                if self.state.remaining() == 0 {
                    self.begin_round(sink);
                }
            }
            // Mismatch, or no sequence to index into yet.
            _ => {
                self.state.phase = GamePhase::Lost;
                sink.emit(GameEvent::PlayerLost);
            }
        }
    }

    /// Extends the sequence by one move and announces the new round.
    fn begin_round(&mut self, sink: &mut dyn EventSink) {
        let state = &mut *self.state;

        state.round += 1;
        state.progress = 0;

        let seed = compute_seed(state.game_seed, state.round);
        state.sequence.push(self.rng.draw_move(seed));
        state.phase = GamePhase::AwaitingInput;

        let round = state.round;
        sink.emit(GameEvent::RoundCountChanged {
            total_rounds: round,
        });
        sink.emit(GameEvent::ProgressChanged {
            matched: 0,
            total_rounds: round,
        });
        sink.emit(GameEvent::RoundStarted { round });

        for (index, &mv) in state.sequence.iter().enumerate() {
            sink.emit(GameEvent::FlashRequested {
                mv,
                index: index as u32,
                total_rounds: round,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::env::PcgRng;

    /// Returns the scripted moves in order, then RED forever.
    struct Scripted {
        moves: Vec<Move>,
        cursor: AtomicUsize,
    }

    impl Scripted {
        fn new(moves: &[Move]) -> Self {
            Self {
                moves: moves.to_vec(),
                cursor: AtomicUsize::new(0),
            }
        }
    }

    impl RngOracle for Scripted {
        fn next_u32(&self, _seed: u64) -> u32 {
            let at = self.cursor.fetch_add(1, Ordering::Relaxed);
            match self.moves.get(at) {
                Some(Move::Blue) => 1,
                _ => 0,
            }
        }
    }

    fn flashes(events: &[GameEvent]) -> Vec<(Move, u32, u32)> {
        events
            .iter()
            .filter_map(|event| match *event {
                GameEvent::FlashRequested {
                    mv,
                    index,
                    total_rounds,
                } => Some((mv, index, total_rounds)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_game_announces_round_one() {
        let rng = Scripted::new(&[Move::Blue]);
        let mut state = GameState::new();
        let mut events = Vec::new();

        GameEngine::new(&mut state, &rng).start_game(1, &mut events);

        assert_eq!(
            events,
            vec![
                GameEvent::RoundCountChanged { total_rounds: 1 },
                GameEvent::ProgressChanged {
                    matched: 0,
                    total_rounds: 1
                },
                GameEvent::RoundStarted { round: 1 },
                GameEvent::FlashRequested {
                    mv: Move::Blue,
                    index: 0,
                    total_rounds: 1
                },
            ]
        );
        assert_eq!(state.round, 1);
        assert_eq!(state.sequence, vec![Move::Blue]);
        assert_eq!(state.progress, 0);
        assert_eq!(state.phase, GamePhase::AwaitingInput);
        assert_eq!(state.validate(), Ok(()));
    }

    #[test]
    fn correct_press_completes_round_and_begins_next() {
        let rng = Scripted::new(&[Move::Red, Move::Blue]);
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state, &rng);
        engine.start_game(1, &mut Vec::new());

        let mut events = Vec::new();
        engine.submit_move(false, &mut events);

        assert_eq!(
            &events[..4],
            &[
                GameEvent::ProgressChanged {
                    matched: 1,
                    total_rounds: 1
                },
                GameEvent::RoundCountChanged { total_rounds: 2 },
                GameEvent::ProgressChanged {
                    matched: 0,
                    total_rounds: 2
                },
                GameEvent::RoundStarted { round: 2 },
            ]
        );
        assert_eq!(
            flashes(&events),
            vec![(Move::Red, 0, 2), (Move::Blue, 1, 2)]
        );
        assert_eq!(events.len(), 6);
        assert_eq!(state.sequence, vec![Move::Red, Move::Blue]);
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn wrong_press_emits_only_player_lost() {
        let rng = Scripted::new(&[Move::Red]);
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state, &rng);
        engine.start_game(1, &mut Vec::new());

        let mut events = Vec::new();
        engine.submit_move(true, &mut events);

        assert_eq!(events, vec![GameEvent::PlayerLost]);
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.round, 1);
        assert_eq!(state.sequence, vec![Move::Red]);
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn press_before_any_game_loses() {
        let rng = PcgRng;
        let mut state = GameState::new();
        let mut events = Vec::new();

        GameEngine::new(&mut state, &rng).submit_move(false, &mut events);

        assert_eq!(events, vec![GameEvent::PlayerLost]);
        assert!(state.is_lost());
        assert!(state.sequence.is_empty());
        assert_eq!(state.validate(), Ok(()));
    }

    #[test]
    fn presses_after_loss_are_silent() {
        let rng = Scripted::new(&[Move::Red]);
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state, &rng);
        engine.start_game(1, &mut Vec::new());
        engine.submit_move(true, &mut Vec::new());

        let mut events = Vec::new();
        engine.submit_move(false, &mut events);
        engine.submit_move(true, &mut events);

        assert!(events.is_empty());
        assert_eq!(state.progress, 0);
        assert_eq!(state.round, 1);
    }

    #[test]
    fn restart_resets_state() {
        let rng = PcgRng;
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state, &rng);
        engine.start_game(9, &mut Vec::new());
        engine.start_game(9, &mut Vec::new());

        assert_eq!(state.round, 1);
        assert_eq!(state.sequence.len(), 1);
        assert_eq!(state.progress, 0);
        assert_eq!(state.phase, GamePhase::AwaitingInput);
    }

    #[test]
    fn restart_after_loss_begins_fresh_game() {
        let rng = Scripted::new(&[Move::Red, Move::Blue]);
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state, &rng);
        engine.start_game(1, &mut Vec::new());
        engine.submit_move(true, &mut Vec::new());

        let mut events = Vec::new();
        engine.start_game(2, &mut events);

        assert_eq!(events[0], GameEvent::RoundCountChanged { total_rounds: 1 });
        assert_eq!(state.sequence, vec![Move::Blue]);
        assert_eq!(state.phase, GamePhase::AwaitingInput);
    }

    #[test]
    fn perfect_play_grows_sequence_by_one_per_round() {
        let rng = PcgRng;
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state, &rng);
        engine.start_game(0xDEAD_BEEF, &mut Vec::new());

        for round in 1..=25u32 {
            let target = engine.state.sequence.clone();
            assert_eq!(target.len(), round as usize);

            let mut events = Vec::new();
            for mv in &target {
                assert!(engine.state.progress as usize <= engine.state.sequence.len());
                engine.submit_move(mv.is_blue(), &mut events);
            }

            assert!(!events.contains(&GameEvent::PlayerLost));
            assert_eq!(engine.state.round, round + 1);
            assert_eq!(engine.state.sequence[..target.len()], target[..]);
            assert_eq!(engine.state.validate(), Ok(()));
        }
    }

    #[test]
    fn same_seed_replays_same_sequence() {
        let rng = PcgRng;
        let play = |seed: u64| {
            let mut state = GameState::new();
            let mut engine = GameEngine::new(&mut state, &rng);
            engine.start_game(seed, &mut Vec::new());
            for _ in 0..10 {
                let target = engine.state.sequence.clone();
                for mv in target {
                    engine.submit_move(mv.is_blue(), &mut Vec::new());
                }
            }
            state.sequence
        };

        assert_eq!(play(77), play(77));
        assert_eq!(play(77).len(), 11);
    }
}
