//! Combatant roles: player professions and opponent archetypes.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A player's profession. Profession-restricted actions are only usable by
/// players of that profession.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum Profession {
    Warrior,
    Mage,
    Rogue,
}

/// Behavioral strategy that governs which action an opponent picks.
///
/// See [`crate::policy`] for the decision trees behind each variant.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum Archetype {
    /// Always fires the strongest ready action.
    BurstAggressor,
    /// Opens with, and finishes with, its ultimate; rotates otherwise.
    Executioner,
    /// Adjusts aggression to the target's remaining HP.
    AdaptiveCaster,
    /// Strongest ready action first, no special rules.
    #[default]
    Standard,
}

impl Archetype {
    /// Short description for display purposes.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::BurstAggressor => "Aggressive: Prioritizes burst damage",
            Self::Executioner => "Strategic: Uses ultimate for executes",
            Self::AdaptiveCaster => "Adaptive: Adjusts strategy based on your HP",
            Self::Standard => "Standard: Uses available skills",
        }
    }
}

/// What side a combatant fights on, and the tag that comes with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Player { profession: Profession },
    Opponent { archetype: Archetype },
}

impl Role {
    pub const fn profession(&self) -> Option<Profession> {
        match self {
            Self::Player { profession } => Some(*profession),
            Self::Opponent { .. } => None,
        }
    }

    pub const fn archetype(&self) -> Option<Archetype> {
        match self {
            Self::Player { .. } => None,
            Self::Opponent { archetype } => Some(*archetype),
        }
    }

    pub const fn is_player(&self) -> bool {
        matches!(self, Self::Player { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profession_parses_case_insensitively() {
        assert_eq!("warrior".parse::<Profession>(), Ok(Profession::Warrior));
        assert_eq!("MAGE".parse::<Profession>(), Ok(Profession::Mage));
        assert_eq!(Profession::Rogue.to_string(), "ROGUE");
    }

    #[test]
    fn archetype_round_trips_through_display() {
        for archetype in [
            Archetype::BurstAggressor,
            Archetype::Executioner,
            Archetype::AdaptiveCaster,
            Archetype::Standard,
        ] {
            assert_eq!(archetype.to_string().parse::<Archetype>(), Ok(archetype));
        }
    }
}
