//! Equipment definitions.

use std::collections::BTreeMap;

use crate::ids::EquipmentId;
use crate::stats::Attribute;

/// Slot an equipment piece occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Helmet,
    Boots,
    Ring,
    Amulet,
}

/// Template for one equipment piece.
///
/// Bonuses are flat attribute deltas applied through the owner's stat table
/// when the piece is equipped (and reversed when unequipped), so they pass
/// the same clamping choke point as every other stat change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentDefinition {
    pub id: EquipmentId,
    pub name: String,
    pub slot: EquipSlot,
    pub bonuses: BTreeMap<Attribute, f32>,
}

/// Provides equipment definitions by id.
pub trait EquipmentOracle: Send + Sync {
    fn equipment(&self, id: EquipmentId) -> Option<&EquipmentDefinition>;
}
