//! Headless runner configuration loaded from environment variables.
use std::env;
use std::path::PathBuf;

use arena_core::Profession;

/// Configuration for one headless run.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub player_name: String,
    pub profession: Profession,
    pub stats_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub training_amount: u32,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            player_name: "Hero".to_owned(),
            profession: Profession::Warrior,
            stats_path: None,
            data_dir: None,
            catalog_path: None,
            seed: None,
            training_amount: 5,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_PLAYER_NAME` - Player name (default: Hero)
    /// - `ARENA_PROFESSION` - WARRIOR, MAGE or ROGUE (default: WARRIOR)
    /// - `ARENA_STATS_PATH` - Statistics file (default: platform data dir)
    /// - `ARENA_DATA_DIR` - Directory holding combat.toml and catalog.ron
    /// - `ARENA_CATALOG` - Catalog file, overrides the data directory's
    /// - `ARENA_SEED` - Fixed seed for reproducible runs (default: entropy)
    /// - `ARENA_TRAINING_AMOUNT` - Points per training cycle (default: 5)
    /// - `ARENA_SESSION_ID` - Log directory name (default: timestamp)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup("ARENA_PLAYER_NAME").filter(|name| !name.trim().is_empty()) {
            config.player_name = name.trim().to_owned();
        }

        if let Some(profession) = read(&lookup, "ARENA_PROFESSION") {
            config.profession = profession;
        }

        if let Some(amount) = read::<u32>(&lookup, "ARENA_TRAINING_AMOUNT") {
            config.training_amount = amount.max(1);
        }

        config.stats_path = lookup("ARENA_STATS_PATH").map(PathBuf::from);
        config.data_dir = lookup("ARENA_DATA_DIR").map(PathBuf::from);
        config.catalog_path = lookup("ARENA_CATALOG").map(PathBuf::from);
        config.seed = read(&lookup, "ARENA_SEED");
        config.session_id = lookup("ARENA_SESSION_ID");

        config
    }
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = lookup(key)?;
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, value = %value, "ignoring unparsable environment variable");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]);
        assert_eq!(config.player_name, "Hero");
        assert_eq!(config.profession, Profession::Warrior);
        assert_eq!(config.training_amount, 5);
        assert!(config.seed.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("ARENA_PLAYER_NAME", "Ayla"),
            ("ARENA_PROFESSION", "rogue"),
            ("ARENA_SEED", "99"),
            ("ARENA_TRAINING_AMOUNT", "0"),
            ("ARENA_CATALOG", "/tmp/catalog.ron"),
        ]);
        assert_eq!(config.player_name, "Ayla");
        assert_eq!(config.profession, Profession::Rogue);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.training_amount, 1);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.ron")));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config(&[("ARENA_PROFESSION", "bard"), ("ARENA_SEED", "abc")]);
        assert_eq!(config.profession, Profession::Warrior);
        assert!(config.seed.is_none());
    }
}
