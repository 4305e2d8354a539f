//! Data-driven content definitions and loaders.
//!
//! This crate turns RON/TOML data files into the immutable lookup tables
//! `game-core` consumes through its oracle traits:
//! - Level definitions (waves, boss, rewards) — RON
//! - Monster definitions (base stats, kill rewards) — RON
//! - Skill, equipment, and drop-table definitions — RON
//! - Global configuration (retain ratios, combat balance) — TOML
//!
//! Everything is validated at load time: empty wave lists, dangling ids, and
//! malformed stat values are fatal configuration errors surfaced here, so
//! the combat/wave core can assume validated input and never re-check.
//!
//! All loaders use game-core types directly with serde for deserialization.

pub mod loaders;
pub mod registry;
pub mod validate;

pub use loaders::{ConfigLoader, DefinitionLoader};
pub use registry::ContentRegistry;
pub use validate::ValidationError;
