//! Condition and action nodes for opponent behavior trees.
//!
//! Condition nodes only read the context. Action nodes record a choice and
//! succeed, or fail without touching it when the action is not ready.

use behavior_tree::{Behavior, Status};

use super::context::{DecisionContext, Tier};

/// Succeeds if the action at `tier` exists and is off cooldown.
pub struct IsReady(pub Tier);

impl Behavior<DecisionContext> for IsReady {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        ctx.is_ready(self.0).into()
    }
}

/// Succeeds if target HP is strictly below `percent` of its maximum.
pub struct TargetHealthBelow {
    pub percent: u32,
}

impl Behavior<DecisionContext> for TargetHealthBelow {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        ctx.target_health_below(self.percent).into()
    }
}

/// Lethal check: the raw damage of `tier` meets or exceeds target HP.
pub struct IsLethal(pub Tier);

impl Behavior<DecisionContext> for IsLethal {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let lethal = ctx.view(self.0).is_some() && ctx.raw_damage(self.0) >= ctx.target_hp;
        lethal.into()
    }
}

/// Two-hit lookahead: succeeds if the ultimate followed by two signature
/// hits would exceed target HP.
pub struct ComboLethal;

impl Behavior<DecisionContext> for ComboLethal {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        let combo = u64::from(ctx.raw_damage(Tier::Ultimate))
            + 2 * u64::from(ctx.raw_damage(Tier::Signature));
        (combo > u64::from(ctx.target_hp)).into()
    }
}

/// Choose the action at `tier` if it is ready.
pub struct UseIfReady(pub Tier);

impl Behavior<DecisionContext> for UseIfReady {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        ctx.choose(self.0.index()).into()
    }
}

/// Choose the strongest ready action in the loadout, whatever its size.
pub struct UseStrongestReady;

impl Behavior<DecisionContext> for UseStrongestReady {
    fn tick(&self, ctx: &mut DecisionContext) -> Status {
        match ctx.strongest_ready() {
            Some(index) => ctx.choose(index).into(),
            None => Status::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::context::ActionView;

    fn ctx(ready: [bool; 3], target_hp: u32) -> DecisionContext {
        let actions = ready
            .iter()
            .zip([10, 25, 45])
            .map(|(&ready, raw_damage)| ActionView { ready, raw_damage })
            .collect();
        DecisionContext::new(actions, target_hp, 100)
    }

    #[test]
    fn use_if_ready_skips_cooldown() {
        let mut c = ctx([true, false, true], 100);
        assert_eq!(UseIfReady(Tier::Signature).tick(&mut c), Status::Failure);
        assert_eq!(c.choice(), None);
        assert_eq!(UseIfReady(Tier::Ultimate).tick(&mut c), Status::Success);
        assert_eq!(c.choice(), Some(2));
    }

    #[test]
    fn strongest_ready_scans_from_the_top() {
        let mut c = ctx([true, true, false], 100);
        assert_eq!(UseStrongestReady.tick(&mut c), Status::Success);
        assert_eq!(c.choice(), Some(1));

        let mut none = ctx([false, false, false], 100);
        assert_eq!(UseStrongestReady.tick(&mut none), Status::Failure);
    }

    #[test]
    fn lethal_check_compares_against_current_hp() {
        assert_eq!(IsLethal(Tier::Ultimate).tick(&mut ctx([true; 3], 45)), Status::Success);
        assert_eq!(IsLethal(Tier::Ultimate).tick(&mut ctx([true; 3], 46)), Status::Failure);
    }

    #[test]
    fn health_thresholds_are_strict() {
        let mut at_forty = ctx([true; 3], 40);
        assert_eq!(TargetHealthBelow { percent: 40 }.tick(&mut at_forty), Status::Failure);
        assert_eq!(TargetHealthBelow { percent: 70 }.tick(&mut at_forty), Status::Success);
    }

    #[test]
    fn combo_lethal_adds_two_signature_hits() {
        // 45 + 2 * 25 = 95
        assert_eq!(ComboLethal.tick(&mut ctx([true; 3], 94)), Status::Success);
        assert_eq!(ComboLethal.tick(&mut ctx([true; 3], 95)), Status::Failure);
    }
}
