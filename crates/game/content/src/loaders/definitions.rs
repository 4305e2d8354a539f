//! Definition table loaders.
//!
//! Each table lives in its own RON file as a list of records; the loader
//! indexes them by their embedded id and rejects duplicates. Cross-table
//! reference checks happen afterwards in [`crate::validate`].

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use serde::de::DeserializeOwned;

use game_core::{
    DropTableDefinition, DropTableId, EquipmentDefinition, EquipmentId, LevelDefinition, LevelId,
    MonsterDefinition, MonsterId, SkillDefinition, SkillId,
};

use crate::loaders::{LoadResult, read_file};

/// Loader for id-keyed definition tables from RON files.
pub struct DefinitionLoader;

impl DefinitionLoader {
    pub fn load_levels(path: &Path) -> LoadResult<BTreeMap<LevelId, LevelDefinition>> {
        Self::load_table(path, "level", |level: &LevelDefinition| level.id)
    }

    pub fn load_monsters(path: &Path) -> LoadResult<BTreeMap<MonsterId, MonsterDefinition>> {
        Self::load_table(path, "monster", |monster: &MonsterDefinition| monster.id)
    }

    pub fn load_skills(path: &Path) -> LoadResult<BTreeMap<SkillId, SkillDefinition>> {
        Self::load_table(path, "skill", |skill: &SkillDefinition| skill.id)
    }

    pub fn load_equipment(path: &Path) -> LoadResult<BTreeMap<EquipmentId, EquipmentDefinition>> {
        Self::load_table(path, "equipment", |item: &EquipmentDefinition| item.id)
    }

    pub fn load_drop_tables(path: &Path) -> LoadResult<BTreeMap<DropTableId, DropTableDefinition>> {
        Self::load_table(path, "drop table", |table: &DropTableDefinition| table.id)
    }

    fn load_table<K, T>(
        path: &Path,
        what: &str,
        key: impl Fn(&T) -> K,
    ) -> LoadResult<BTreeMap<K, T>>
    where
        K: Ord + Copy + Display,
        T: DeserializeOwned,
    {
        let content = read_file(path)?;
        let records: Vec<T> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {} RON at {:?}: {}", what, path, e))?;

        let mut table = BTreeMap::new();
        for record in records {
            let id = key(&record);
            if table.insert(id, record).is_some() {
                anyhow::bail!("Duplicate {} id {} in {:?}", what, id, path);
            }
        }
        Ok(table)
    }
}
