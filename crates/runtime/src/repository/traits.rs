//! Storage contract for session statistics.

use crate::stats::SessionStats;

use super::Result;

/// Loads and saves [`SessionStats`].
///
/// A store with nothing saved yet returns default statistics from `load`.
pub trait StatsStore: Send + Sync {
    fn load(&self) -> Result<SessionStats>;

    fn save(&self, stats: &SessionStats) -> Result<()>;

    /// Load, falling back to defaults when the stored data is unreadable.
    fn load_or_default(&self) -> SessionStats {
        self.load().unwrap_or_else(|error| {
            tracing::warn!(%error, "could not load statistics, starting fresh");
            SessionStats::default()
        })
    }
}
