//! Combat result types.

use std::fmt;

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target. A missed action still starts its cooldown.
    Miss,
    /// Attack hit the target.
    Hit,
}

/// What a combatant does (or is about to do) on its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// A named action from the loadout.
    Action(String),
    /// The fallback attack dealing raw power as damage.
    BasicAttack,
}

impl Intent {
    pub fn is_basic_attack(&self) -> bool {
        matches!(self, Self::BasicAttack)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(name) => f.write_str(name),
            Self::BasicAttack => f.write_str("Basic Attack"),
        }
    }
}

/// Result of resolving one action attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    pub intent: Intent,
    pub outcome: AttackOutcome,
    /// Damage dealt (0 on a miss).
    pub damage: u32,
    /// Whether the target is defeated after this action.
    pub target_defeated: bool,
}

impl ActionReport {
    pub fn is_hit(&self) -> bool {
        self.outcome == AttackOutcome::Hit
    }
}
