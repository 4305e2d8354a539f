//! Level progression.
//!
//! The [`WaveDirector`] walks a [`crate::env::LevelDefinition`] as a state
//! machine driven by discrete death events: waves spawn in sequence, the
//! boss follows the last wave, and the run ends in victory or defeat. The
//! director performs no I/O itself; spawning and notification go through the
//! [`Spawner`] and [`EventSink`] collaborator traits passed into each
//! transition.
//!
//! Death events must reach the director one at a time, in the order they
//! occurred. Wave completion hinges on the alive-count reaching exactly
//! zero, so callers delivering events from multiple threads must serialize
//! them first (the runtime owns that queue).

mod director;
mod events;
mod rewards;

pub use director::{DirectorError, DirectorState, RunState, WaveDirector};
pub use events::{EventSink, GameEvent, Spawner};
pub use rewards::Rewards;
