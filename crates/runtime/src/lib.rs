//! Session runtime for the arena.
//!
//! `arena-runtime` glues the pure rules in `arena-core` to the content in
//! `arena-content`. It owns the player and the shuffled opponent roster,
//! runs training between encounters, forwards encounter operations to the
//! combat engine and persists cross-session statistics.
//!
//! ```rust,ignore
//! use arena_content::CatalogLoader;
//! use arena_core::{CombatConfig, Profession};
//! use arena_runtime::{FileStatsStore, GameSession};
//!
//! let catalog = CatalogLoader::stock()?;
//! let mut session = GameSession::new(catalog, CombatConfig::default(), FileStatsStore::default_location());
//! session.initialize("Hero", Profession::Warrior)?;
//! session.prepare_encounter(0)?;
//! let won = session.simulate_encounter(0)?;
//! ```
pub mod error;
pub mod repository;
pub mod session;
pub mod stats;
pub mod training;

pub use error::{Result, SessionError};
pub use repository::{FileStatsStore, MemoryStatsStore, StatsStore, StatsStoreError};
pub use session::{GameSession, RosterEntry};
pub use stats::SessionStats;
