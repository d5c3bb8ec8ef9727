//! Persistence for cross-session statistics.
//!
//! Encounter state is never persisted; only [`SessionStats`](crate::SessionStats)
//! outlives a session.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{Result, StatsStoreError};
pub use file::FileStatsStore;
pub use memory::MemoryStatsStore;
pub use traits::StatsStore;
