//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use arena_core::CombatConfig;

use crate::catalog::Catalog;
use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Loads arena content from a data directory, falling back to the stock
/// content for files that do not exist.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml
/// └── catalog.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "combat.toml";
    pub const CATALOG_FILE: &'static str = "catalog.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load combat tuning from `combat.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no combat config, using defaults");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the catalog from `catalog.ron`, or the stock catalog if absent.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join(Self::CATALOG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no catalog file, using stock catalog");
            return CatalogLoader::stock();
        }
        CatalogLoader::load(&path)
    }
}
