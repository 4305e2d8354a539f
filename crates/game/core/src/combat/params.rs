//! Balance parameters for damage resolution.

/// Tunable combat balance values.
///
/// Defaults encode the shipped balance policy; `config.toml` may override
/// them per deployment. Both floors exist so stacked defense can soften but
/// never nullify an attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatParams {
    /// Mitigated damage never drops below this fraction of raw damage.
    pub damage_floor_ratio: f32,
    /// Absolute floor on final damage.
    pub min_damage: f32,
}

impl CombatParams {
    pub const DEFAULT_DAMAGE_FLOOR_RATIO: f32 = 0.1;
    pub const DEFAULT_MIN_DAMAGE: f32 = 1.0;

    /// Clamp the parameters into sane ranges.
    ///
    /// The floor ratio is a fraction of raw damage, so values outside `[0, 1]`
    /// are configuration mistakes; negative minimum damage would let attacks
    /// heal.
    pub fn sanitized(self) -> Self {
        Self {
            damage_floor_ratio: self.damage_floor_ratio.clamp(0.0, 1.0),
            min_damage: self.min_damage.max(0.0),
        }
    }
}

impl Default for CombatParams {
    fn default() -> Self {
        Self {
            damage_floor_ratio: Self::DEFAULT_DAMAGE_FLOOR_RATIO,
            min_damage: Self::DEFAULT_MIN_DAMAGE,
        }
    }
}
