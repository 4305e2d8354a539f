//! Drop table definitions.

use crate::ids::{DropTableId, EquipmentId};

/// One weighted loot entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropEntry {
    pub item: EquipmentId,
    pub weight: u32,
}

/// Weighted loot rolled when a monster dies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropTableDefinition {
    pub id: DropTableId,
    pub entries: Vec<DropEntry>,
}

impl DropTableDefinition {
    /// Pick an entry by a roll in `[0, total_weight)`.
    ///
    /// Returns `None` for an empty table (nothing drops).
    pub fn pick(&self, roll: u32) -> Option<&DropEntry> {
        let total: u32 = self.entries.iter().map(|entry| entry.weight).sum();
        if total == 0 {
            return None;
        }
        let mut remaining = roll % total;
        for entry in &self.entries {
            if remaining < entry.weight {
                return Some(entry);
            }
            remaining -= entry.weight;
        }
        None
    }
}

/// Provides drop tables by id.
pub trait DropOracle: Send + Sync {
    fn drop_table(&self, id: DropTableId) -> Option<&DropTableDefinition>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_respects_weights() {
        let table = DropTableDefinition {
            id: DropTableId(1),
            entries: vec![
                DropEntry { item: EquipmentId(10), weight: 1 },
                DropEntry { item: EquipmentId(20), weight: 3 },
            ],
        };

        assert_eq!(table.pick(0).unwrap().item, EquipmentId(10));
        assert_eq!(table.pick(1).unwrap().item, EquipmentId(20));
        assert_eq!(table.pick(3).unwrap().item, EquipmentId(20));
        // Roll wraps around the total weight.
        assert_eq!(table.pick(4).unwrap().item, EquipmentId(10));
    }

    #[test]
    fn empty_table_drops_nothing() {
        let table = DropTableDefinition { id: DropTableId(2), entries: vec![] };
        assert!(table.pick(5).is_none());
    }
}
