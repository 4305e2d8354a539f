//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing fields fall back to the shipped defaults; ratio fields are
    /// clamped into `[0, 1]` before the config reaches the core.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::from_toml(&content)
    }

    /// Parse config from a TOML string.
    pub fn from_toml(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config.sanitized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = ConfigLoader::from_toml(
            r#"
            exp_retain_ratio = 0.5
            gold_retain_ratio = 0.25

            [combat]
            damage_floor_ratio = 0.2
            min_damage = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.exp_retain_ratio, 0.5);
        assert_eq!(config.gold_retain_ratio, 0.25);
        assert_eq!(config.combat.damage_floor_ratio, 0.2);
        assert_eq!(config.combat.min_damage, 2.0);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = ConfigLoader::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn out_of_range_ratios_are_clamped() {
        let config = ConfigLoader::from_toml("exp_retain_ratio = 7.0").unwrap();
        assert_eq!(config.exp_retain_ratio, 1.0);
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "gold_retain_ratio = 0.1").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.gold_retain_ratio, 0.1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::load(&dir.path().join("absent.toml")).is_err());
    }
}
