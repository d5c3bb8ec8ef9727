//! Behavior trees for each opponent archetype.
//!
//! ```text
//! executioner()
//!   └─ Selector
//!       ├─ Sequence [IsReady(Ult), Selector [target at full HP, IsLethal(Ult)], UseIfReady(Ult)]
//!       ├─ UseIfReady(Sig)
//!       └─ UseIfReady(Basic)
//! ```
//!
//! Every tree checks readiness before anything else, so an action on cooldown
//! is never chosen regardless of its tier.

use behavior_tree::Behavior;
use behavior_tree::builder::{condition, inverter, selector, sequence};

use super::context::{DecisionContext, Tier};
use super::nodes::{
    ComboLethal, IsLethal, IsReady, TargetHealthBelow, UseIfReady, UseStrongestReady,
};

pub type PolicyTree = Box<dyn Behavior<DecisionContext>>;

/// Below this target HP percentage the adaptive caster goes for the kill.
pub const FINISHING_THRESHOLD: u32 = 40;
/// Below this (and at or above [`FINISHING_THRESHOLD`]) it weighs a two-hit combo.
pub const PRESSURE_THRESHOLD: u32 = 70;

/// Burst aggressor: strongest ready action, strictly by tier.
pub fn burst_aggressor() -> PolicyTree {
    Box::new(UseStrongestReady)
}

/// Executioner: ultimate on the opening turn or when it is lethal, otherwise
/// signature, then basic.
pub fn executioner() -> PolicyTree {
    selector(vec![
        sequence(vec![
            Box::new(IsReady(Tier::Ultimate)),
            selector(vec![
                // Opening turn, inferred from an undamaged target.
                condition(DecisionContext::target_at_full_health),
                Box::new(IsLethal(Tier::Ultimate)),
            ]),
            Box::new(UseIfReady(Tier::Ultimate)),
        ]),
        Box::new(UseIfReady(Tier::Signature)),
        Box::new(UseIfReady(Tier::Basic)),
    ])
}

/// Adaptive caster: aggression scales with how hurt the target is.
pub fn adaptive_caster() -> PolicyTree {
    selector(vec![
        // Finishing: strongest first.
        sequence(vec![
            Box::new(TargetHealthBelow {
                percent: FINISHING_THRESHOLD,
            }),
            selector(vec![
                Box::new(UseIfReady(Tier::Ultimate)),
                Box::new(UseIfReady(Tier::Signature)),
                Box::new(UseIfReady(Tier::Basic)),
            ]),
        ]),
        // Pressure: ultimate only if the follow-up combo can finish.
        sequence(vec![
            Box::new(TargetHealthBelow {
                percent: PRESSURE_THRESHOLD,
            }),
            selector(vec![
                sequence(vec![
                    Box::new(IsReady(Tier::Ultimate)),
                    Box::new(ComboLethal),
                    Box::new(UseIfReady(Tier::Ultimate)),
                ]),
                Box::new(UseIfReady(Tier::Signature)),
                Box::new(UseIfReady(Tier::Ultimate)),
                Box::new(UseIfReady(Tier::Basic)),
            ]),
        ]),
        // Opening: signature, ultimate only when signature is cooling down.
        selector(vec![
            Box::new(UseIfReady(Tier::Signature)),
            sequence(vec![
                inverter(Box::new(IsReady(Tier::Signature))),
                Box::new(UseIfReady(Tier::Ultimate)),
            ]),
            Box::new(UseIfReady(Tier::Basic)),
        ]),
    ])
}

/// Standard: strongest ready action.
pub fn standard() -> PolicyTree {
    Box::new(UseStrongestReady)
}
