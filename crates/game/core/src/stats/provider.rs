//! Capability abstraction over named-attribute access.

use super::attribute::Attribute;
use super::table::StatTable;

/// Anything that can report and adjust named attributes.
///
/// The combat resolver and the runtime session are generic over this trait
/// rather than over a concrete participant type: any entity representation
/// that can answer for its attributes satisfies the combat input contract.
pub trait StatsProvider {
    /// Read an attribute. Unset attributes read as `0.0`.
    fn stat(&self, attribute: Attribute) -> f32;

    /// Add `delta` to an attribute, re-applying the owner's clamping rules.
    fn modify_stat(&mut self, attribute: Attribute, delta: f32);

    /// Current health.
    fn hp(&self) -> f32 {
        self.stat(Attribute::Hp)
    }

    /// Health ceiling.
    fn max_hp(&self) -> f32 {
        self.stat(Attribute::MaxHp)
    }

    /// True while current health is above zero.
    fn is_alive(&self) -> bool {
        self.hp() > 0.0
    }
}

impl StatsProvider for StatTable {
    fn stat(&self, attribute: Attribute) -> f32 {
        self.get(attribute)
    }

    fn modify_stat(&mut self, attribute: Attribute, delta: f32) {
        self.modify(attribute, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_satisfies_provider_contract() {
        let mut table = StatTable::from_pairs([(Attribute::MaxHp, 20.0), (Attribute::Hp, 20.0)]);

        assert!(table.is_alive());
        table.modify_stat(Attribute::Hp, -20.0);
        assert!(!table.is_alive());
        assert_eq!(table.hp(), 0.0);
        assert_eq!(table.max_hp(), 20.0);
    }
}
