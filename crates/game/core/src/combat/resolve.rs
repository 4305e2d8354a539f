//! Attack resolution.

use crate::stats::{Attribute, StatsProvider};

use super::params::CombatParams;

/// Result of a resolved attack.
///
/// Resolution never mutates either participant. Callers apply the damage
/// (`defender.modify_stat(Hp, -damage)`), apply lifesteal to the attacker if
/// they honor it, and emit health-change / death notifications.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Final damage, already floored at `CombatParams::min_damage`.
    pub damage: f32,
    /// Whether the critical roll succeeded.
    pub critical: bool,
}

/// Resolve an attack between two participants.
///
/// # Formula
///
/// ```text
/// raw       = attacker.Attack × base_power_multiplier
/// mitigated = max(raw − defender.Defense, raw × damage_floor_ratio)
/// if crit_roll < attacker.CritChance:
///     mitigated ×= 1 + attacker.CritDamage
/// mitigated ×= 1 − defender.DamageReduction
/// final     = max(mitigated, min_damage)
/// ```
///
/// Defense subtracts flat, but damage is floored at a fraction of raw so
/// high defense can never zero an attack out; the absolute floor guarantees
/// at least `min_damage` even for a zero or negative multiplier (an attack
/// never heals). `CritChance` and `DamageReduction` outside `[0, 1]` are
/// clamped before use rather than rejected, so combat never stalls on
/// out-of-range input.
///
/// # Arguments
///
/// * `attacker` - Attacking participant's stats
/// * `defender` - Defending participant's stats
/// * `base_power_multiplier` - Skill power multiplier applied to raw damage
/// * `crit_roll` - Uniform sample in `[0, 1)` for the critical check
/// * `params` - Balance parameters (from the config oracle)
pub fn resolve_attack(
    attacker: &impl StatsProvider,
    defender: &impl StatsProvider,
    base_power_multiplier: f32,
    crit_roll: f32,
    params: &CombatParams,
) -> AttackResult {
    let raw = attacker.stat(Attribute::Attack) * base_power_multiplier;

    let mut mitigated = (raw - defender.stat(Attribute::Defense)).max(raw * params.damage_floor_ratio);

    let crit_chance = attacker.stat(Attribute::CritChance).clamp(0.0, 1.0);
    let critical = crit_roll < crit_chance;
    if critical {
        mitigated *= 1.0 + attacker.stat(Attribute::CritDamage);
    }

    let reduction = defender.stat(Attribute::DamageReduction).clamp(0.0, 1.0);
    mitigated *= 1.0 - reduction;

    AttackResult {
        damage: mitigated.max(params.min_damage),
        critical,
    }
}
