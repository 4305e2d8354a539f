//! Traits describing read-only game content.
//!
//! Oracles expose the immutable definition tables (levels, monsters, skills,
//! equipment, drop tables, global config) keyed by id. The [`GameEnv`]
//! aggregate bundles them so combat and progression callers can access
//! everything they need without hard coupling to concrete implementations;
//! loading and ownership of the tables lives in `game-content`.

mod config;
mod drops;
mod equipment;
mod error;
mod levels;
mod monsters;
mod rng;
mod skills;

pub use config::ConfigOracle;
pub use drops::{DropEntry, DropOracle, DropTableDefinition};
pub use equipment::{EquipSlot, EquipmentDefinition, EquipmentOracle};
pub use error::OracleError;
pub use levels::{BossDefinition, LevelDefinition, LevelOracle, SpawnEntry, WaveDefinition};
pub use monsters::{MonsterDefinition, MonsterOracle};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use skills::{SkillDefinition, SkillOracle};

use crate::ids::{DropTableId, EquipmentId, LevelId, MonsterId, SkillId};

/// Aggregates the read-only oracles a level run needs.
///
/// Lookup methods fail fast with [`OracleError`] on dangling ids: the tables
/// are validated at load time, so a missing reference here is a fatal
/// configuration error, not a runtime condition to paper over.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    levels: &'a dyn LevelOracle,
    monsters: &'a dyn MonsterOracle,
    skills: &'a dyn SkillOracle,
    equipment: &'a dyn EquipmentOracle,
    drops: &'a dyn DropOracle,
    config: &'a dyn ConfigOracle,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        levels: &'a dyn LevelOracle,
        monsters: &'a dyn MonsterOracle,
        skills: &'a dyn SkillOracle,
        equipment: &'a dyn EquipmentOracle,
        drops: &'a dyn DropOracle,
        config: &'a dyn ConfigOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            levels,
            monsters,
            skills,
            equipment,
            drops,
            config,
            rng,
        }
    }

    pub fn level(&self, id: LevelId) -> Result<&'a LevelDefinition, OracleError> {
        self.levels.level(id).ok_or(OracleError::LevelNotFound(id))
    }

    pub fn monster(&self, id: MonsterId) -> Result<&'a MonsterDefinition, OracleError> {
        self.monsters
            .monster(id)
            .ok_or(OracleError::MonsterNotFound(id))
    }

    pub fn skill(&self, id: SkillId) -> Result<&'a SkillDefinition, OracleError> {
        self.skills.skill(id).ok_or(OracleError::SkillNotFound(id))
    }

    pub fn equipment(&self, id: EquipmentId) -> Result<&'a EquipmentDefinition, OracleError> {
        self.equipment
            .equipment(id)
            .ok_or(OracleError::EquipmentNotFound(id))
    }

    pub fn drop_table(&self, id: DropTableId) -> Result<&'a DropTableDefinition, OracleError> {
        self.drops
            .drop_table(id)
            .ok_or(OracleError::DropTableNotFound(id))
    }

    pub fn config(&self) -> &'a crate::config::GameConfig {
        self.config.config()
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv").finish_non_exhaustive()
    }
}
