//! Monster definitions.

use std::collections::BTreeMap;

use crate::ids::{DropTableId, MonsterId};
use crate::stats::{Attribute, StatTable};

/// Template for one monster kind.
///
/// `base_stats` holds the attribute values a freshly spawned instance starts
/// with; [`MonsterDefinition::stat_table`] materializes them into a clamped
/// per-entity table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterDefinition {
    pub id: MonsterId,
    pub name: String,
    pub base_stats: BTreeMap<Attribute, f32>,
    /// Experience granted to the player when this monster dies.
    pub exp_value: u32,
    /// Gold granted to the player when this monster dies.
    pub gold_value: u32,
    /// Loot rolled on death, if any.
    pub drop_table: Option<DropTableId>,
}

impl MonsterDefinition {
    /// Build the stat table for a fresh instance of this monster.
    ///
    /// When the template sets `MaxHp` but no explicit `Hp`, the instance
    /// spawns at full health.
    pub fn stat_table(&self) -> StatTable {
        let mut pairs: Vec<(Attribute, f32)> =
            self.base_stats.iter().map(|(&a, &v)| (a, v)).collect();

        if !self.base_stats.contains_key(&Attribute::Hp) {
            if let Some(&max_hp) = self.base_stats.get(&Attribute::MaxHp) {
                pairs.push((Attribute::Hp, max_hp));
            }
        }

        StatTable::from_pairs(pairs)
    }
}

/// Provides monster definitions by id.
pub trait MonsterOracle: Send + Sync {
    fn monster(&self, id: MonsterId) -> Option<&MonsterDefinition>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_at_full_health_when_hp_unset() {
        let definition = MonsterDefinition {
            id: MonsterId(7),
            name: "slime".into(),
            base_stats: BTreeMap::from([
                (Attribute::MaxHp, 30.0),
                (Attribute::Attack, 4.0),
            ]),
            exp_value: 5,
            gold_value: 2,
            drop_table: None,
        };

        let table = definition.stat_table();
        assert_eq!(table.get(Attribute::Hp), 30.0);
        assert_eq!(table.get(Attribute::Attack), 4.0);
    }

    #[test]
    fn explicit_hp_respected() {
        let definition = MonsterDefinition {
            id: MonsterId(8),
            name: "wounded_wolf".into(),
            base_stats: BTreeMap::from([(Attribute::MaxHp, 40.0), (Attribute::Hp, 10.0)]),
            exp_value: 8,
            gold_value: 3,
            drop_table: None,
        };

        assert_eq!(definition.stat_table().get(Attribute::Hp), 10.0);
    }
}
