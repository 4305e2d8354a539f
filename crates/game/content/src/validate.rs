//! Load-time validation of the content tables.
//!
//! The combat/wave core assumes validated input, so every structural rule is
//! enforced here, once, when content is loaded. Any violation is a fatal
//! configuration error: the session refuses to start rather than limp along
//! with a level that can never complete.

use std::collections::BTreeMap;

use game_core::{
    Attribute, DropTableDefinition, DropTableId, EquipmentDefinition, EquipmentId,
    LevelDefinition, LevelId, MonsterDefinition, MonsterId,
};

/// Structural errors in loaded content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A level has no waves at all.
    #[error("level {level} has an empty wave list")]
    EmptyWaveList { level: LevelId },

    /// A wave has no spawn entries.
    #[error("level {level} wave {wave} has no spawn entries")]
    EmptyWave { level: LevelId, wave: u32 },

    /// A spawn entry would materialize zero monsters.
    #[error("level {level} wave {wave} has a spawn entry with zero count")]
    ZeroSpawnCount { level: LevelId, wave: u32 },

    /// A spawn entry names no spawn points.
    #[error("level {level} wave {wave} has a spawn entry with no spawn points")]
    NoSpawnPoints { level: LevelId, wave: u32 },

    /// A wave or boss references a monster id missing from the monster table.
    #[error("level {level} references unknown monster {monster}")]
    DanglingMonster { level: LevelId, monster: MonsterId },

    /// A monster references a drop table missing from the drop tables.
    #[error("monster {monster} references unknown drop table {table}")]
    DanglingDropTable { monster: MonsterId, table: DropTableId },

    /// A drop table entry references an equipment id missing from the table.
    #[error("drop table {table} references unknown equipment {item}")]
    DanglingEquipment { table: DropTableId, item: EquipmentId },

    /// A monster base stat is NaN or infinite.
    #[error("monster {monster} has a non-finite base stat")]
    NonFiniteStat { monster: MonsterId },

    /// A monster base stat is below zero.
    #[error("monster {monster} has a negative {attribute} base stat")]
    NegativeStat {
        monster: MonsterId,
        attribute: Attribute,
    },
}

/// Cross-check all tables. Returns the first violation found.
pub fn validate(
    levels: &BTreeMap<LevelId, LevelDefinition>,
    monsters: &BTreeMap<MonsterId, MonsterDefinition>,
    drop_tables: &BTreeMap<DropTableId, DropTableDefinition>,
    equipment: &BTreeMap<EquipmentId, EquipmentDefinition>,
) -> Result<(), ValidationError> {
    for monster in monsters.values() {
        for (&attribute, &value) in &monster.base_stats {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteStat { monster: monster.id });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeStat {
                    monster: monster.id,
                    attribute,
                });
            }
        }
        if let Some(table) = monster.drop_table
            && !drop_tables.contains_key(&table)
        {
            return Err(ValidationError::DanglingDropTable {
                monster: monster.id,
                table,
            });
        }
    }

    for level in levels.values() {
        if level.waves.is_empty() {
            return Err(ValidationError::EmptyWaveList { level: level.id });
        }

        for wave in &level.waves {
            if wave.spawns.is_empty() {
                return Err(ValidationError::EmptyWave {
                    level: level.id,
                    wave: wave.id,
                });
            }
            for entry in &wave.spawns {
                if entry.count == 0 {
                    return Err(ValidationError::ZeroSpawnCount {
                        level: level.id,
                        wave: wave.id,
                    });
                }
                if entry.spawn_points.is_empty() {
                    return Err(ValidationError::NoSpawnPoints {
                        level: level.id,
                        wave: wave.id,
                    });
                }
                if !monsters.contains_key(&entry.monster) {
                    return Err(ValidationError::DanglingMonster {
                        level: level.id,
                        monster: entry.monster,
                    });
                }
            }
        }

        if let Some(boss) = &level.boss
            && !monsters.contains_key(&boss.monster)
        {
            return Err(ValidationError::DanglingMonster {
                level: level.id,
                monster: boss.monster,
            });
        }
    }

    for table in drop_tables.values() {
        for entry in &table.entries {
            if !equipment.contains_key(&entry.item) {
                return Err(ValidationError::DanglingEquipment {
                    table: table.id,
                    item: entry.item,
                });
            }
        }
    }

    Ok(())
}
