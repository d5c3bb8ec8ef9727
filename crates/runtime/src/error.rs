//! Errors surfaced by the session API.

use arena_core::{ErrorSeverity, GameError, Profession, Rejection};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no player has been created")]
    NoPlayer,

    #[error("a player already exists in this session")]
    PlayerExists,

    #[error("catalog has no loadout for {0}")]
    MissingLoadout(Profession),

    #[error("no opponent at index {index} (roster has {count})")]
    UnknownOpponent { index: usize, count: usize },

    #[error("training amount must be positive")]
    InvalidAmount,

    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Rejected(rejection) => rejection.severity(),
            Self::MissingLoadout(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPlayer => "NO_PLAYER",
            Self::PlayerExists => "PLAYER_EXISTS",
            Self::MissingLoadout(_) => "MISSING_LOADOUT",
            Self::UnknownOpponent { .. } => "UNKNOWN_OPPONENT",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::UnknownAttribute(_) => "UNKNOWN_ATTRIBUTE",
            Self::Rejected(rejection) => rejection.error_code(),
        }
    }
}
