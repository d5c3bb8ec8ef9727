//! Blackboard for opponent decisions.
//!
//! [`DecisionContext`] is an owned, read-mostly view of the two combatants
//! taken before the tree is ticked. Nodes read readiness and damage from it
//! and record the chosen index in `choice`; nothing in here can reach back
//! into the combatants, so evaluating a tree never mutates encounter state.

use crate::state::Combatant;

/// Loadout positions the archetype trees refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Weakest action (index 0).
    Basic,
    /// Mid-tier action (index 1).
    Signature,
    /// Strongest action (index 2).
    Ultimate,
}

impl Tier {
    pub const fn index(self) -> usize {
        match self {
            Self::Basic => 0,
            Self::Signature => 1,
            Self::Ultimate => 2,
        }
    }
}

/// Per-action view used by the decision nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionView {
    pub ready: bool,
    /// `base_power + power`, ignoring hit chance.
    pub raw_damage: u32,
}

/// Context for a single opponent decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionContext {
    actions: Vec<ActionView>,
    pub target_hp: u32,
    pub target_max_hp: u32,
    choice: Option<usize>,
}

impl DecisionContext {
    pub fn new(actions: Vec<ActionView>, target_hp: u32, target_max_hp: u32) -> Self {
        Self {
            actions,
            target_hp,
            target_max_hp,
            choice: None,
        }
    }

    /// Snapshot `opponent`'s loadout against `target`.
    pub fn capture(opponent: &Combatant, target: &Combatant) -> Self {
        let actions = opponent
            .actions()
            .iter()
            .map(|action| ActionView {
                ready: action.is_usable(opponent),
                raw_damage: action.damage_for(opponent),
            })
            .collect();
        let attributes = target.attributes();
        Self::new(actions, attributes.current_hp(), attributes.max_hp())
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn view(&self, tier: Tier) -> Option<ActionView> {
        self.actions.get(tier.index()).copied()
    }

    pub fn is_ready(&self, tier: Tier) -> bool {
        self.view(tier).is_some_and(|view| view.ready)
    }

    pub fn raw_damage(&self, tier: Tier) -> u32 {
        self.view(tier).map_or(0, |view| view.raw_damage)
    }

    /// Index of the strongest ready action, scanning from the end.
    pub fn strongest_ready(&self) -> Option<usize> {
        self.actions.iter().rposition(|view| view.ready)
    }

    /// `true` when target HP is strictly below `percent` of its maximum.
    pub fn target_health_below(&self, percent: u32) -> bool {
        u64::from(self.target_hp) * 100 < u64::from(self.target_max_hp) * u64::from(percent)
    }

    /// Stands in for "the opening turn". A target healed back to full counts
    /// again.
    pub fn target_at_full_health(&self) -> bool {
        self.target_hp >= self.target_max_hp
    }

    /// Record a choice. Only ready actions may be chosen.
    pub fn choose(&mut self, index: usize) -> bool {
        if self.actions.get(index).is_some_and(|view| view.ready) {
            self.choice = Some(index);
            true
        } else {
            false
        }
    }

    pub fn choice(&self) -> Option<usize> {
        self.choice
    }
}
