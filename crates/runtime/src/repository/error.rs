//! Error types raised by statistics stores.

use arena_core::{ErrorSeverity, GameError};
use thiserror::Error;

/// Errors surfaced by [`StatsStore`](super::StatsStore) implementations.
#[derive(Debug, Error)]
pub enum StatsStoreError {
    #[error("stats store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),
}

impl GameError for StatsStoreError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned => ErrorSeverity::Fatal,
            Self::Io(_) | Self::Json(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "STATS_LOCK_POISONED",
            Self::Io(_) => "STATS_IO",
            Self::Json(_) => "STATS_JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsStoreError>;
