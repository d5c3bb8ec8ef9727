//! Action rejection signals.
//!
//! A rejected action leaves both combatants untouched. Callers branch on the
//! rejection instead of treating it as a failure.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Profession;

/// Why an action attempt was refused before any roll was made.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// No action at this index in the actor's loadout.
    #[error("no action at index {index}")]
    UnknownAction { index: usize },

    /// The action belongs to another profession.
    #[error("{action} can only be used by a {required}")]
    RoleMismatch {
        action: String,
        required: Profession,
    },

    /// The action is still cooling down.
    #[error("{action} is on cooldown for {remaining} more turn(s)")]
    OnCooldown { action: String, remaining: u32 },

    /// The actor has no hit points left.
    #[error("a defeated combatant cannot act")]
    ActorDefeated,
}

impl GameError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OnCooldown { .. } => ErrorSeverity::Recoverable,
            Self::UnknownAction { .. } | Self::RoleMismatch { .. } | Self::ActorDefeated => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAction { .. } => "UNKNOWN_ACTION",
            Self::RoleMismatch { .. } => "ROLE_MISMATCH",
            Self::OnCooldown { .. } => "ON_COOLDOWN",
            Self::ActorDefeated => "ACTOR_DEFEATED",
        }
    }
}
