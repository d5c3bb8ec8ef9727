//! Opponent decision policies.
//!
//! Each [`Archetype`] maps to one behavior tree (see [`presets`]). Trees are
//! built once and evaluated against a [`DecisionContext`] captured from the
//! two combatants, so [`choose_action`] is a pure function of its inputs.
//!
//! Archetypes that reason about specific tiers (executioner, adaptive caster)
//! need at least three actions; with fewer they behave like
//! [`Archetype::Standard`].

pub mod context;
pub mod nodes;
pub mod presets;

use std::sync::LazyLock;

pub use context::{ActionView, DecisionContext, Tier};
pub use presets::PolicyTree;

use crate::state::{Archetype, Combatant};

static BURST_AGGRESSOR: LazyLock<PolicyTree> = LazyLock::new(presets::burst_aggressor);
static EXECUTIONER: LazyLock<PolicyTree> = LazyLock::new(presets::executioner);
static ADAPTIVE_CASTER: LazyLock<PolicyTree> = LazyLock::new(presets::adaptive_caster);
static STANDARD: LazyLock<PolicyTree> = LazyLock::new(presets::standard);

/// Number of actions the tier-aware archetypes need.
pub const TIERED_LOADOUT: usize = 3;

/// The tree that governs `archetype` for a loadout of `action_count` actions.
pub fn tree_for(archetype: Archetype, action_count: usize) -> &'static PolicyTree {
    match archetype {
        Archetype::BurstAggressor => &*BURST_AGGRESSOR,
        Archetype::Executioner if action_count >= TIERED_LOADOUT => &*EXECUTIONER,
        Archetype::AdaptiveCaster if action_count >= TIERED_LOADOUT => &*ADAPTIVE_CASTER,
        _ => &*STANDARD,
    }
}

/// Evaluate `archetype`'s policy against a prepared context.
pub fn decide(archetype: Archetype, ctx: &mut DecisionContext) -> Option<usize> {
    tree_for(archetype, ctx.action_count()).tick(ctx);
    ctx.choice()
}

/// Pick the loadout index `opponent` will use against `target`.
///
/// `None` means no action is ready (or there are none) and the opponent falls
/// back to a basic attack. Players have no archetype and are evaluated with
/// the standard policy.
pub fn choose_action(opponent: &Combatant, target: &Combatant) -> Option<usize> {
    let archetype = opponent.archetype().unwrap_or_default();
    let mut ctx = DecisionContext::capture(opponent, target);
    let choice = decide(archetype, &mut ctx);

    tracing::debug!(
        opponent = opponent.name(),
        %archetype,
        target_hp = ctx.target_hp,
        ?choice,
        "opponent decision"
    );

    choice
}
