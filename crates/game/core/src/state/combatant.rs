//! A participant in an encounter: attributes, loadout, cooldowns and effects.

use crate::action::{Action, ActionId, ActionSet};
use crate::stats::AttributeSet;

use super::cooldowns::Cooldowns;
use super::effects::{ActiveEffects, EffectEvent, TemporaryEffect};
use super::role::{Archetype, Profession, Role};

/// One side of an encounter.
///
/// The action loadout is shared with every other combatant built from the same
/// template; everything mutable (attributes, cooldowns, effects) is owned.
#[derive(Clone, Debug)]
pub struct Combatant {
    name: String,
    role: Role,
    attributes: AttributeSet,
    actions: ActionSet,
    cooldowns: Cooldowns,
    effects: ActiveEffects,
}

impl Combatant {
    pub fn new(
        name: impl Into<String>,
        role: Role,
        attributes: AttributeSet,
        actions: ActionSet,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            attributes,
            actions,
            cooldowns: Cooldowns::new(),
            effects: ActiveEffects::new(),
        }
    }

    pub fn player(
        name: impl Into<String>,
        profession: Profession,
        attributes: AttributeSet,
        actions: ActionSet,
    ) -> Self {
        Self::new(name, Role::Player { profession }, attributes, actions)
    }

    pub fn opponent(
        name: impl Into<String>,
        archetype: Archetype,
        attributes: AttributeSet,
        actions: ActionSet,
    ) -> Self {
        Self::new(name, Role::Opponent { archetype }, attributes, actions)
    }

    /// A copy with the same name, role, base attributes and shared loadout but
    /// none of the mutable encounter state (full HP, no cooldowns, no effects).
    pub fn fresh_copy(&self) -> Self {
        Self::new(
            self.name.clone(),
            self.role,
            AttributeSet::from_base(self.attributes.base()),
            ActionSet::clone(&self.actions),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn profession(&self) -> Option<Profession> {
        self.role.profession()
    }

    pub fn archetype(&self) -> Option<Archetype> {
        self.role.archetype()
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeSet {
        &mut self.attributes
    }

    /// The ordered loadout, weakest first.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The shared handle to the loadout.
    pub fn action_set(&self) -> &ActionSet {
        &self.actions
    }

    pub fn action(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn is_defeated(&self) -> bool {
        self.attributes.is_defeated()
    }

    // ------------------------------------------------------------------------
    // Cooldowns
    // ------------------------------------------------------------------------

    pub fn cooldowns(&self) -> &Cooldowns {
        &self.cooldowns
    }

    /// Remaining cooldown turns for `action`; 0 means ready.
    pub fn cooldown(&self, action: ActionId) -> u32 {
        self.cooldowns.get(action)
    }

    pub fn set_cooldown(&mut self, action: ActionId, turns: u32) {
        self.cooldowns.set(action, turns);
    }

    pub fn is_ready(&self, action: ActionId) -> bool {
        self.cooldowns.is_ready(action)
    }

    pub fn tick_all_cooldowns(&mut self) {
        self.cooldowns.tick_all();
    }

    pub fn reset_all_cooldowns(&mut self) {
        self.cooldowns.reset();
    }

    // ------------------------------------------------------------------------
    // Effects
    // ------------------------------------------------------------------------

    pub fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    /// Apply `effect` and track it until it expires.
    pub fn add_effect(&mut self, effect: TemporaryEffect) -> Option<EffectEvent> {
        self.effects.add(effect, &mut self.attributes)
    }

    /// Tick every active effect once.
    pub fn update_effects(&mut self) -> Vec<EffectEvent> {
        self.effects.update(&mut self.attributes)
    }

    /// Expire every active effect immediately.
    pub fn clear_effects(&mut self) -> Vec<EffectEvent> {
        self.effects.clear(&mut self.attributes)
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Turn-start bookkeeping: cooldowns first, then effects.
    pub fn begin_turn(&mut self) -> Vec<EffectEvent> {
        self.tick_all_cooldowns();
        self.update_effects()
    }

    /// Reset to a clean encounter state: no cooldowns, no effects, full HP.
    pub fn prepare_for_encounter(&mut self) -> Vec<EffectEvent> {
        self.reset_all_cooldowns();
        let events = self.clear_effects();
        self.attributes.full_heal();
        events
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}/{} HP)",
            self.name,
            self.attributes.current_hp(),
            self.attributes.max_hp()
        )
    }
}
