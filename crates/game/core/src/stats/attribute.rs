//! The closed set of named attributes tracked per entity.

/// Named numeric attribute on a combat participant.
///
/// The set is closed: content files and combat formulas may only reference
/// attributes listed here. String forms are snake_case for RON/TOML data.
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
pub enum Attribute {
    /// Current health. Clamped to `[0, MaxHp]`.
    Hp,
    /// Health ceiling.
    MaxHp,
    /// Base attack power fed into damage resolution.
    Attack,
    /// Flat damage mitigation.
    Defense,
    /// Movement speed (consumed by the external movement layer).
    MoveSpeed,
    /// Attacks per second (consumed by the external attack scheduler).
    AttackSpeed,
    /// Probability of a critical strike. Clamped to `[0, 1]`.
    CritChance,
    /// Bonus damage fraction applied on a critical strike.
    CritDamage,
    /// Character level.
    Level,
    /// Experience accumulated toward the next level.
    CurrentExp,
    /// Experience required for the next level.
    NextLevelExp,
    /// Carried gold.
    Gold,
    /// Fraction of dealt damage returned as healing.
    LifeSteal,
    /// Fraction of incoming damage ignored. Clamped to `[0, 1]`.
    DamageReduction,
}

impl Attribute {
    /// Attributes whose values are constrained to the unit interval.
    pub const fn is_unit_ratio(self) -> bool {
        matches!(self, Attribute::CritChance | Attribute::DamageReduction)
    }
}
