//! Level, wave, and spawn definitions.
//!
//! A level is a declarative script for one run: an ordered sequence of
//! monster waves followed by an optional boss. Definitions are immutable
//! once loaded and shared read-only by every run of that level; the
//! [`crate::progression::WaveDirector`] walks them without ever writing
//! back.

use crate::ids::{LevelId, MonsterId};

/// Declarative description of one level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDefinition {
    pub id: LevelId,
    pub name: String,
    /// Scene reference resolved by the external scene loader.
    pub scene: String,
    /// Gold awarded in full on victory.
    pub reward_gold: u32,
    /// Experience awarded in full on victory.
    pub reward_exp: u32,
    /// Waves execute in sequence; order is meaningful.
    pub waves: Vec<WaveDefinition>,
    /// Single terminal spawn after all waves. A level without a boss goes
    /// straight to victory when its last wave clears.
    pub boss: Option<BossDefinition>,
}

impl LevelDefinition {
    /// Index of the final wave. Loaders reject empty wave lists, so this is
    /// well-defined for any definition the core sees.
    pub fn last_wave_index(&self) -> usize {
        self.waves.len().saturating_sub(1)
    }
}

/// One batch of monster spawns that must all die before progression continues.
///
/// The spawn entries within a wave are an unordered set; only the waves
/// themselves are sequenced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveDefinition {
    pub id: u32,
    pub spawns: Vec<SpawnEntry>,
}

impl WaveDefinition {
    /// Total number of monsters this wave materializes.
    pub fn monster_count(&self) -> u32 {
        self.spawns.iter().map(|entry| entry.count).sum()
    }
}

/// A batch of identical monsters within a wave.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnEntry {
    pub monster: MonsterId,
    pub count: u32,
    /// Named spawn points, cycled through when `count` exceeds their number.
    pub spawn_points: Vec<String>,
}

/// The single terminal spawn following all waves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossDefinition {
    pub monster: MonsterId,
    pub spawn_point: String,
}

/// Provides level definitions by id.
pub trait LevelOracle: Send + Sync {
    fn level(&self, id: LevelId) -> Option<&LevelDefinition>;
}
