//! Reward payout math.

use crate::config::GameConfig;
use crate::env::LevelDefinition;

/// Gold and experience paid out at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub gold: u32,
    pub exp: u32,
}

impl Rewards {
    /// Full payout on victory.
    pub fn victory(level: &LevelDefinition) -> Self {
        Self {
            gold: level.reward_gold,
            exp: level.reward_exp,
        }
    }

    /// Partial payout on defeat, governed by the retain ratios.
    ///
    /// Fractions truncate toward zero: a player keeps whole units only.
    pub fn retained(level: &LevelDefinition, config: &GameConfig) -> Self {
        let gold_ratio = config.gold_retain_ratio.clamp(0.0, 1.0);
        let exp_ratio = config.exp_retain_ratio.clamp(0.0, 1.0);
        Self {
            gold: (level.reward_gold as f32 * gold_ratio) as u32,
            exp: (level.reward_exp as f32 * exp_ratio) as u32,
        }
    }
}
