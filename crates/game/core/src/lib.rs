//! Deterministic gameplay rules shared across clients and tools.
//!
//! `game-core` defines the canonical combat and progression rules (stat
//! tables, attack resolution, level/wave state machine) and exposes pure
//! APIs that can be reused by both the runtime and offline balance tools.
//! The crate performs no I/O: static content arrives through the oracle
//! traits in [`env`], and outward effects leave through the collaborator
//! traits in [`progression`].
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod ids;
pub mod progression;
pub mod save;
pub mod stats;

pub use combat::{AttackResult, CombatParams, resolve_attack};
pub use config::GameConfig;
pub use env::{
    BossDefinition, ConfigOracle, DropEntry, DropOracle, DropTableDefinition, EquipSlot,
    EquipmentDefinition, EquipmentOracle, GameEnv, LevelDefinition, LevelOracle,
    MonsterDefinition, MonsterOracle, OracleError, PcgRng, RngOracle, SkillDefinition,
    SkillOracle, SpawnEntry, WaveDefinition, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use ids::{DropTableId, EntityId, EquipmentId, LevelId, MonsterId, SkillId};
pub use progression::{
    DirectorError, DirectorState, EventSink, GameEvent, Rewards, RunState, Spawner, WaveDirector,
};
pub use save::{EquipmentSave, PlayerProgress, SaveData, SettingsSave};
pub use stats::{Attribute, StatTable, StatsProvider};
