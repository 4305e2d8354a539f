//! Collaborator traits and outward-facing events.

use crate::ids::{EntityId, LevelId, MonsterId};

use super::director::DirectorState;

/// Materializes monsters into the world.
///
/// The core does not know how entities are instantiated; it only asks for a
/// monster at a named spawn point and receives a handle back.
pub trait Spawner {
    fn spawn(&mut self, monster: MonsterId, spawn_point: &str) -> EntityId;
}

/// Receives named events, fire-and-forget.
///
/// No return value is expected and the core never waits on delivery; the
/// runtime's bus adapter fans events out to whoever subscribed.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Events announced by the core to the outside world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// An entity's health changed (emitted by whoever applies damage).
    HealthChanged {
        entity: EntityId,
        old_hp: f32,
        new_hp: f32,
    },

    /// The player entity died; the run ended in defeat.
    PlayerKilled { entity: EntityId },

    /// The boss died; the run ended in victory. Emitted exactly once per run.
    LevelCompleted {
        level_id: LevelId,
        reward_gold: u32,
        reward_exp: u32,
    },

    /// A death was reported that the director had no live monster for.
    ///
    /// This is a caller-side logic error (double delivery for an already
    /// removed entity). The director ignores the decrement; the event exists
    /// for diagnosability.
    SpuriousMonsterDeath { state: DirectorState },
}
