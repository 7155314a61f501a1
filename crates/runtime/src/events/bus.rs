//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use simon_core::GameEvent;
use tokio::sync::broadcast;

use super::types::FlashCue;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Engine notifications (round, progress, flash requests, loss)
    Game,
    /// Timed flash cues for the sequence replay
    Flash,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Game, Topic::Flash];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// An engine notification, tagged with the game generation it belongs to.
    Game { game: u64, event: GameEvent },
    Flash(FlashCue),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Game { .. } => Topic::Game,
            Event::Flash(_) => Topic::Flash,
        }
    }

    /// Game generation this event belongs to.
    pub fn game(&self) -> u64 {
        match self {
            Event::Game { game, .. } => *game,
            Event::Flash(cue) => cue.game,
        }
    }
}

struct Channels {
    game: broadcast::Sender<Event>,
    flash: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Game => &self.game,
            Topic::Flash => &self.flash,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is best-effort: events sent while a
/// topic has no subscribers are dropped.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                game: broadcast::channel(capacity).0,
                flash: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simon_core::Move;

    #[tokio::test]
    async fn routes_events_by_topic() {
        let bus = EventBus::with_capacity(8);
        let mut game_rx = bus.subscribe(Topic::Game);
        let mut flash_rx = bus.subscribe(Topic::Flash);

        bus.publish(Event::Game {
            game: 1,
            event: GameEvent::PlayerLost,
        });
        bus.publish(Event::Flash(FlashCue {
            game: 1,
            round: 1,
            index: 0,
            mv: Move::Red,
            lit: true,
        }));

        assert_eq!(
            game_rx.recv().await.unwrap(),
            Event::Game {
                game: 1,
                event: GameEvent::PlayerLost
            }
        );
        assert!(game_rx.try_recv().is_err());
        assert_eq!(flash_rx.recv().await.unwrap().topic(), Topic::Flash);
    }

    #[test]
    fn publish_without_subscribers_is_harmless() {
        let bus = EventBus::new();
        bus.publish(Event::Game {
            game: 3,
            event: GameEvent::RoundStarted { round: 1 },
        });
        assert_eq!(bus.subscribe_multiple(&Topic::ALL).len(), 2);
    }
}
