//! In-memory statistics store for tests and throwaway sessions.

mod stats;

pub use stats::MemoryStatsStore;
