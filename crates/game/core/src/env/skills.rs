//! Skill definitions.

use crate::ids::SkillId;

/// Template for one skill.
///
/// A skill's contribution to combat is a single base power multiplier fed
/// into [`crate::combat::resolve_attack`]; everything else about a skill
/// (animation, cooldown presentation) lives outside the core.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    /// Power multiplier per skill level, index 0 = level 1.
    pub power_multipliers: Vec<f32>,
}

impl SkillDefinition {
    /// Multiplier for the given skill level.
    ///
    /// Level 0 means the skill is not learned and contributes a neutral
    /// multiplier; levels beyond the table saturate at the last entry.
    pub fn multiplier(&self, level: u32) -> f32 {
        if level == 0 || self.power_multipliers.is_empty() {
            return 1.0;
        }
        let index = (level as usize - 1).min(self.power_multipliers.len() - 1);
        self.power_multipliers[index]
    }
}

/// Provides skill definitions by id.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: SkillId) -> Option<&SkillDefinition>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fireball() -> SkillDefinition {
        SkillDefinition {
            id: SkillId(3),
            name: "fireball".into(),
            power_multipliers: vec![1.2, 1.5, 2.0],
        }
    }

    #[test]
    fn multiplier_by_level() {
        let skill = fireball();
        assert_eq!(skill.multiplier(1), 1.2);
        assert_eq!(skill.multiplier(3), 2.0);
    }

    #[test]
    fn unlearned_and_saturated_levels() {
        let skill = fireball();
        assert_eq!(skill.multiplier(0), 1.0);
        assert_eq!(skill.multiplier(99), 2.0);
    }
}
