use std::sync::RwLock;

use crate::repository::{Result, StatsStore, StatsStoreError};
use crate::stats::SessionStats;

/// Keeps statistics in memory for the lifetime of the store.
#[derive(Default)]
pub struct MemoryStatsStore {
    stats: RwLock<SessionStats>,
}

impl MemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats(stats: SessionStats) -> Self {
        Self {
            stats: RwLock::new(stats),
        }
    }
}

impl StatsStore for MemoryStatsStore {
    fn load(&self) -> Result<SessionStats> {
        let stats = self
            .stats
            .read()
            .map_err(|_| StatsStoreError::LockPoisoned)?;
        Ok(stats.clone())
    }

    fn save(&self, stats: &SessionStats) -> Result<()> {
        let mut stored = self
            .stats
            .write()
            .map_err(|_| StatsStoreError::LockPoisoned)?;
        *stored = stats.clone();
        Ok(())
    }
}
