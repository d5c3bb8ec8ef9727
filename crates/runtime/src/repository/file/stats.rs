//! JSON file statistics store.
//!
//! Statistics live in a single pretty-printed JSON document:
//! ```text
//! {data_dir}/stats.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::repository::{Result, StatsStore, StatsStoreError};
use crate::stats::SessionStats;

/// Stores [`SessionStats`] as a JSON file.
pub struct FileStatsStore {
    path: PathBuf,
}

impl FileStatsStore {
    pub const FILE_NAME: &'static str = "stats.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory, or `./save_data` when the
    /// platform has none.
    pub fn default_location() -> Self {
        let dir = ProjectDirs::from("", "", "arena")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"));
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for FileStatsStore {
    fn load(&self) -> Result<SessionStats> {
        if !self.path.exists() {
            return Ok(SessionStats::default());
        }

        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json)
            .map_err(|e| StatsStoreError::Json(format!("Failed to parse statistics: {}", e)))
    }

    fn save(&self, stats: &SessionStats) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(stats)
            .map_err(|e| StatsStoreError::Json(format!("Failed to serialize statistics: {}", e)))?;
        fs::write(&self.path, json)?;

        tracing::debug!(path = %self.path.display(), "statistics saved");
        Ok(())
    }
}
