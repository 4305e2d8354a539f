//! Game configuration and tunable balance parameters.

use crate::combat::CombatParams;

/// Global configuration values loaded once per session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Fraction of a level's reward exp kept by the player after a defeat.
    pub exp_retain_ratio: f32,
    /// Fraction of a level's reward gold kept by the player after a defeat.
    pub gold_retain_ratio: f32,
    /// Combat balance parameters.
    pub combat: CombatParams,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EXP_RETAIN_RATIO: f32 = 0.3;
    pub const DEFAULT_GOLD_RETAIN_RATIO: f32 = 0.3;

    pub fn new() -> Self {
        Self {
            exp_retain_ratio: Self::DEFAULT_EXP_RETAIN_RATIO,
            gold_retain_ratio: Self::DEFAULT_GOLD_RETAIN_RATIO,
            combat: CombatParams::default(),
        }
    }

    /// Clamp all ratio fields into `[0, 1]`.
    ///
    /// Loaders call this after deserialization so an out-of-range value in
    /// `config.toml` degrades to the nearest legal ratio instead of leaking
    /// into reward math.
    pub fn sanitized(self) -> Self {
        Self {
            exp_retain_ratio: self.exp_retain_ratio.clamp(0.0, 1.0),
            gold_retain_ratio: self.gold_retain_ratio.clamp(0.0, 1.0),
            combat: self.combat.sanitized(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
