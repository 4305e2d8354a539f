//! Topic-based event bus implementation.

use tokio::sync::broadcast;

use game_core::progression::{EventSink, GameEvent};

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Topic {
    /// Per-attack outcomes (health changes).
    Combat,
    /// Run-level outcomes (deaths, completion, warnings).
    Progression,
}

impl Topic {
    /// Routing: which topic an event belongs to.
    pub fn of(event: &GameEvent) -> Topic {
        match event {
            GameEvent::HealthChanged { .. } => Topic::Combat,
            GameEvent::PlayerKilled { .. }
            | GameEvent::LevelCompleted { .. }
            | GameEvent::SpuriousMonsterDeath { .. } => Topic::Progression,
        }
    }
}

/// Topic-based event bus.
///
/// Consumers subscribe to the topic they care about and only receive those
/// events. Publishing is fire-and-forget: no subscribers is a normal state,
/// and the publisher never blocks or waits on delivery.
#[derive(Clone)]
pub struct EventBus {
    combat: broadcast::Sender<GameEvent>,
    progression: broadcast::Sender<GameEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            combat: broadcast::channel(capacity).0,
            progression: broadcast::channel(capacity).0,
        }
    }

    /// Publish an event to its corresponding topic.
    pub fn publish(&self, event: GameEvent) {
        let topic = Topic::of(&event);
        let sender = match topic {
            Topic::Combat => &self.combat,
            Topic::Progression => &self.progression,
        };
        if sender.send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error.
            tracing::trace!(?topic, "no subscribers for topic");
        }
    }

    /// Subscribe to a specific topic.
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        match topic {
            Topic::Combat => self.combat.subscribe(),
            Topic::Progression => self.progression.subscribe(),
        }
    }

    /// Borrow the bus as the sink the core's director emits into.
    pub fn sink(&self) -> BusSink<'_> {
        BusSink { bus: self }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter implementing the core's [`EventSink`] over the bus.
pub struct BusSink<'a> {
    bus: &'a EventBus,
}

impl EventSink for BusSink<'_> {
    fn emit(&mut self, event: GameEvent) {
        self.bus.publish(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::EntityId;

    #[test]
    fn routes_events_by_topic() {
        let bus = EventBus::new();
        let mut combat = bus.subscribe(Topic::Combat);
        let mut progression = bus.subscribe(Topic::Progression);

        bus.publish(GameEvent::HealthChanged {
            entity: EntityId(1),
            old_hp: 10.0,
            new_hp: 4.0,
        });
        bus.publish(GameEvent::PlayerKilled { entity: EntityId::PLAYER });

        assert!(matches!(combat.try_recv(), Ok(GameEvent::HealthChanged { .. })));
        assert!(combat.try_recv().is_err());

        assert!(matches!(progression.try_recv(), Ok(GameEvent::PlayerKilled { .. })));
        assert!(progression.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(GameEvent::PlayerKilled { entity: EntityId::PLAYER });
    }

    #[test]
    fn sink_forwards_to_bus() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe(Topic::Progression);

        let mut sink = bus.sink();
        use game_core::progression::EventSink as _;
        sink.emit(GameEvent::PlayerKilled { entity: EntityId::PLAYER });

        assert!(matches!(rx.try_recv(), Ok(GameEvent::PlayerKilled { .. })));
    }
}
