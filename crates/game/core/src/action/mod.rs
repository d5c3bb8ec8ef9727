//! Combat actions (skills).
//!
//! An [`Action`] is immutable configuration: name, base power, base cooldown and
//! an optional profession restriction. Combatants never copy actions; they
//! share an [`ActionSet`] and track cooldowns by [`ActionId`].

mod error;
mod resolve;

use std::sync::Arc;

pub use error::Rejection;

use crate::state::Profession;

/// Stable, opaque identity of an action.
///
/// Identities are assigned once when a catalog is built and are unique across
/// the whole catalog, so two actions with the same name never share cooldowns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub u32);

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named combat action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    id: ActionId,
    name: String,
    restricted_to: Option<Profession>,
    base_power: u32,
    base_cooldown: u32,
}

/// An ordered, shared loadout of actions (weakest first).
pub type ActionSet = Arc<[Action]>;

impl Action {
    pub fn new(id: ActionId, name: impl Into<String>, base_power: u32, base_cooldown: u32) -> Self {
        Self {
            id,
            name: name.into(),
            restricted_to: None,
            base_power,
            base_cooldown,
        }
    }

    /// Restrict this action to players of `profession`.
    pub fn restricted_to(mut self, profession: Profession) -> Self {
        self.restricted_to = Some(profession);
        self
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn restriction(&self) -> Option<Profession> {
        self.restricted_to
    }

    pub fn base_power(&self) -> u32 {
        self.base_power
    }

    pub fn base_cooldown(&self) -> u32 {
        self.base_cooldown
    }
}
