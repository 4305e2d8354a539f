//! Shape of externally persisted player data.
//!
//! The core never writes saves; persistence belongs to an external
//! collaborator. These types exist because combat and progression read a few
//! fields (unlocked level, per-skill levels, progress totals) to parametrize
//! themselves, and the shape has to agree between the two sides.
//!
//! Inventories and equipped gear are plain maps. The original pair-list
//! layout was a serialization artifact, not a semantic requirement.

use std::collections::BTreeMap;

use crate::env::EquipSlot;
use crate::ids::{EquipmentId, LevelId, SkillId};

/// Player progress totals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerProgress {
    pub level: u32,
    pub exp: u32,
    pub gold: u32,
    /// Highest level id the player may enter.
    pub unlocked_level: LevelId,
    /// Consumable id → count held.
    pub consumables: BTreeMap<u32, u32>,
    /// Skill id → learned level (absent = not learned).
    pub skill_levels: BTreeMap<SkillId, u32>,
}

/// Equipment owned and worn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSave {
    /// Equipment id → count in the bag.
    pub inventory: BTreeMap<EquipmentId, u32>,
    /// Slot → equipped item.
    pub equipped: BTreeMap<EquipSlot, EquipmentId>,
}

/// Player-tunable settings carried alongside progress.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingsSave {
    pub music_volume: f32,
    pub effects_volume: f32,
}

/// Everything the external persistence layer stores for one profile.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveData {
    pub progress: PlayerProgress,
    pub equipment: EquipmentSave,
    pub settings: SettingsSave,
}

impl SaveData {
    /// Learned level of a skill, `0` when not learned.
    pub fn skill_level(&self, skill: SkillId) -> u32 {
        self.progress.skill_levels.get(&skill).copied().unwrap_or(0)
    }

    /// Whether a level is unlocked for entry.
    pub fn is_level_unlocked(&self, level: LevelId) -> bool {
        level.0 <= self.progress.unlocked_level.0
    }
}
