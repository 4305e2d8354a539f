//! Event-driven shell around the gameplay rules core.
//!
//! The runtime owns what the core deliberately does not: the topic-based
//! event bus, the per-entity stat tables of a running level, and the
//! single-writer command queue that serializes death events before they
//! reach the wave director. Engine concerns (scenes, actors, rendering)
//! stay outside; they talk to the runtime through [`session::LevelSession`]
//! and the bus.

pub mod events;
pub mod session;

pub use events::{EventBus, Topic};
pub use session::{LevelSession, SessionCommand, SessionError};
