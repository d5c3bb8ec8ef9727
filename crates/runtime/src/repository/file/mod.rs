//! File-based statistics store.

mod stats;

pub use stats::FileStatsStore;
