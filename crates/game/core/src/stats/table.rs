//! StatTable - the per-entity attribute store.

use std::collections::BTreeMap;

use super::attribute::Attribute;

/// Mapping from [`Attribute`] to a floating-point value.
///
/// The table is owned exclusively by the entity it describes and mutated only
/// through [`StatTable::modify`], so every change passes through one choke
/// point where the clamping invariants are re-applied:
///
/// - `Hp ∈ [0, MaxHp]`
/// - `CritChance ∈ [0, 1]`
/// - `DamageReduction ∈ [0, 1]`
///
/// Lookups of unset attributes return `0.0` and never fail: an uninitialized
/// stat is a valid game state (e.g., a freshly spawned entity before its
/// template is applied).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatTable {
    values: BTreeMap<Attribute, f32>,
}

impl StatTable {
    /// Create an empty table. All attributes read as `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from attribute/value pairs.
    ///
    /// Values pass through the same clamping as [`StatTable::modify`], so the
    /// invariants hold from birth. Later pairs override earlier ones.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Attribute, f32)>,
    {
        let mut table = Self::new();
        for (attribute, value) in pairs {
            table.values.insert(attribute, value);
        }
        table.reclamp();
        table
    }

    /// Builder-style insertion, clamped on entry.
    pub fn with(mut self, attribute: Attribute, value: f32) -> Self {
        self.values.insert(attribute, value);
        self.reclamp();
        self
    }

    /// Read an attribute. Unset attributes read as `0.0`.
    pub fn get(&self, attribute: Attribute) -> f32 {
        self.values.get(&attribute).copied().unwrap_or(0.0)
    }

    /// Add `delta` to an attribute, then re-apply the clamping invariants.
    ///
    /// The change is visible to any subsequent [`StatTable::get`]; there is
    /// no hidden buffering.
    pub fn modify(&mut self, attribute: Attribute, delta: f32) {
        let value = self.get(attribute) + delta;
        self.values.insert(attribute, value);
        self.reclamp();
    }

    /// Re-establish all clamping invariants.
    ///
    /// Applied after every mutation. `MaxHp` changes re-clamp `Hp` too, so a
    /// shrunk ceiling immediately pulls current health down with it.
    fn reclamp(&mut self) {
        for attribute in [Attribute::CritChance, Attribute::DamageReduction] {
            if let Some(value) = self.values.get_mut(&attribute) {
                *value = value.clamp(0.0, 1.0);
            }
        }

        let max_hp = self.get(Attribute::MaxHp).max(0.0);
        if let Some(hp) = self.values.get_mut(&Attribute::Hp) {
            *hp = hp.clamp(0.0, max_hp);
        }
    }

    /// Iterate over the attributes that have been explicitly set.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f32)> + '_ {
        self.values.iter().map(|(&attribute, &value)| (attribute, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_attribute_reads_zero() {
        let table = StatTable::new();
        assert_eq!(table.get(Attribute::Attack), 0.0);
        assert_eq!(table.get(Attribute::Hp), 0.0);
    }

    #[test]
    fn modify_is_immediately_visible() {
        let mut table = StatTable::new().with(Attribute::MaxHp, 100.0);
        table.modify(Attribute::Hp, 40.0);
        assert_eq!(table.get(Attribute::Hp), 40.0);
        table.modify(Attribute::Hp, -15.0);
        assert_eq!(table.get(Attribute::Hp), 25.0);
    }

    #[test]
    fn hp_clamped_to_zero_and_max() {
        let mut table = StatTable::from_pairs([(Attribute::MaxHp, 50.0), (Attribute::Hp, 50.0)]);

        table.modify(Attribute::Hp, 1000.0);
        assert_eq!(table.get(Attribute::Hp), 50.0);

        table.modify(Attribute::Hp, -1000.0);
        assert_eq!(table.get(Attribute::Hp), 0.0);
    }

    #[test]
    fn hp_follows_shrinking_max_hp() {
        let mut table = StatTable::from_pairs([(Attribute::MaxHp, 100.0), (Attribute::Hp, 100.0)]);

        table.modify(Attribute::MaxHp, -60.0);
        assert_eq!(table.get(Attribute::MaxHp), 40.0);
        assert_eq!(table.get(Attribute::Hp), 40.0);
    }

    #[test]
    fn unit_ratios_clamped() {
        let mut table = StatTable::new();
        table.modify(Attribute::CritChance, 3.5);
        assert_eq!(table.get(Attribute::CritChance), 1.0);

        table.modify(Attribute::CritChance, -9.0);
        assert_eq!(table.get(Attribute::CritChance), 0.0);

        table.modify(Attribute::DamageReduction, 1.2);
        assert_eq!(table.get(Attribute::DamageReduction), 1.0);
    }

    #[test]
    fn from_pairs_clamps_on_entry() {
        let table = StatTable::from_pairs([
            (Attribute::MaxHp, 30.0),
            (Attribute::Hp, 500.0),
            (Attribute::CritChance, 2.0),
        ]);
        assert_eq!(table.get(Attribute::Hp), 30.0);
        assert_eq!(table.get(Attribute::CritChance), 1.0);
    }

    #[test]
    fn hp_without_max_hp_clamps_to_zero() {
        // No ceiling set means the ceiling is zero, not infinity.
        let mut table = StatTable::new();
        table.modify(Attribute::Hp, 10.0);
        assert_eq!(table.get(Attribute::Hp), 0.0);
    }
}
