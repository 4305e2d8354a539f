//! ContentRegistry - owns the loaded tables and implements the core oracles.

use std::collections::BTreeMap;
use std::path::Path;

use game_core::{
    ConfigOracle, DropOracle, DropTableDefinition, DropTableId, EquipmentDefinition, EquipmentId,
    EquipmentOracle, GameConfig, GameEnv, LevelDefinition, LevelId, LevelOracle,
    MonsterDefinition, MonsterId, MonsterOracle, PcgRng, SkillDefinition, SkillId, SkillOracle,
};

use crate::loaders::{ConfigLoader, DefinitionLoader, LoadResult};
use crate::validate::validate;

/// Immutable, validated content for one session.
///
/// The registry is the single concrete implementation of every oracle trait
/// in `game-core`; sessions borrow it as a [`GameEnv`] and never see the
/// underlying maps.
#[derive(Debug)]
pub struct ContentRegistry {
    levels: BTreeMap<LevelId, LevelDefinition>,
    monsters: BTreeMap<MonsterId, MonsterDefinition>,
    skills: BTreeMap<SkillId, SkillDefinition>,
    equipment: BTreeMap<EquipmentId, EquipmentDefinition>,
    drop_tables: BTreeMap<DropTableId, DropTableDefinition>,
    config: GameConfig,
    rng: PcgRng,
}

impl ContentRegistry {
    /// Load and validate a content directory.
    ///
    /// Expected layout:
    /// ```text
    /// content/
    ///   ├── levels.ron
    ///   ├── monsters.ron
    ///   ├── skills.ron
    ///   ├── equipment.ron
    ///   ├── drops.ron
    ///   └── config.toml
    /// ```
    pub fn load(dir: &Path) -> LoadResult<Self> {
        let levels = DefinitionLoader::load_levels(&dir.join("levels.ron"))?;
        let monsters = DefinitionLoader::load_monsters(&dir.join("monsters.ron"))?;
        let skills = DefinitionLoader::load_skills(&dir.join("skills.ron"))?;
        let equipment = DefinitionLoader::load_equipment(&dir.join("equipment.ron"))?;
        let drop_tables = DefinitionLoader::load_drop_tables(&dir.join("drops.ron"))?;
        let config = ConfigLoader::load(&dir.join("config.toml"))?;

        Self::from_tables(levels, monsters, skills, equipment, drop_tables, config)
    }

    /// Build a registry from already-deserialized tables, validating them.
    ///
    /// Used by tests and tools that synthesize content in memory.
    pub fn from_tables(
        levels: BTreeMap<LevelId, LevelDefinition>,
        monsters: BTreeMap<MonsterId, MonsterDefinition>,
        skills: BTreeMap<SkillId, SkillDefinition>,
        equipment: BTreeMap<EquipmentId, EquipmentDefinition>,
        drop_tables: BTreeMap<DropTableId, DropTableDefinition>,
        config: GameConfig,
    ) -> LoadResult<Self> {
        validate(&levels, &monsters, &drop_tables, &equipment)?;

        Ok(Self {
            levels,
            monsters,
            skills,
            equipment,
            drop_tables,
            config: config.sanitized(),
            rng: PcgRng,
        })
    }

    /// Borrow the registry as the oracle bundle the core consumes.
    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::new(self, self, self, self, self, self, &self.rng)
    }
}

impl LevelOracle for ContentRegistry {
    fn level(&self, id: LevelId) -> Option<&LevelDefinition> {
        self.levels.get(&id)
    }
}

impl MonsterOracle for ContentRegistry {
    fn monster(&self, id: MonsterId) -> Option<&MonsterDefinition> {
        self.monsters.get(&id)
    }
}

impl SkillOracle for ContentRegistry {
    fn skill(&self, id: SkillId) -> Option<&SkillDefinition> {
        self.skills.get(&id)
    }
}

impl EquipmentOracle for ContentRegistry {
    fn equipment(&self, id: EquipmentId) -> Option<&EquipmentDefinition> {
        self.equipment.get(&id)
    }
}

impl DropOracle for ContentRegistry {
    fn drop_table(&self, id: DropTableId) -> Option<&DropTableDefinition> {
        self.drop_tables.get(&id)
    }
}

impl ConfigOracle for ContentRegistry {
    fn config(&self) -> &GameConfig {
        &self.config
    }
}
