//! Combat configuration loader.

use std::path::Path;

use arena_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Omitted fields keep their defaults.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(config.action_threshold > 0, "action_threshold must be positive");
        anyhow::ensure!(
            config.hit_chance_min <= config.hit_chance_max && config.hit_chance_max <= 100,
            "hit chance window {}..={} is invalid",
            config.hit_chance_min,
            config.hit_chance_max
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("max_iterations = 50").unwrap();
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.action_threshold, CombatConfig::DEFAULT_ACTION_THRESHOLD);
        assert_eq!(config.hit_chance_max, 95);
    }

    #[test]
    fn stock_config_equals_defaults() {
        let config = ConfigLoader::parse(include_str!("../../data/combat.toml")).unwrap();
        assert_eq!(config, CombatConfig::default());
    }

    #[test]
    fn inverted_hit_window_is_rejected() {
        assert!(ConfigLoader::parse("hit_chance_min = 90\nhit_chance_max = 10").is_err());
        assert!(ConfigLoader::parse("action_threshold = 0").is_err());
    }
}
