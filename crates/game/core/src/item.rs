//! Single-use consumables.

use crate::state::{Combatant, EffectEvent, TemporaryEffect};
use crate::stats::Attribute;

/// What a consumable does when used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsumableKind {
    /// Restore HP, capped at max HP.
    Heal(u32),
    /// Permanently raise an attribute.
    Boost(Attribute, u32),
    /// Apply a temporary effect that is tracked on the combatant.
    Effect(TemporaryEffect),
}

/// A named consumable item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consumable {
    pub name: String,
    pub description: String,
    pub kind: ConsumableKind,
}

/// Observable result of using a consumable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsumableOutcome {
    Healed(u32),
    Boosted { attribute: Attribute, amount: u32 },
    /// `None` when the effect was ignored (zero duration or no free slot).
    EffectApplied(Option<EffectEvent>),
}

impl Consumable {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: ConsumableKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn use_on(&self, combatant: &mut Combatant) -> ConsumableOutcome {
        let outcome = match &self.kind {
            ConsumableKind::Heal(amount) => {
                ConsumableOutcome::Healed(combatant.attributes_mut().heal(*amount))
            }
            ConsumableKind::Boost(attribute, amount) => {
                combatant.attributes_mut().increase(*attribute, *amount);
                ConsumableOutcome::Boosted {
                    attribute: *attribute,
                    amount: *amount,
                }
            }
            ConsumableKind::Effect(effect) => {
                ConsumableOutcome::EffectApplied(combatant.add_effect(effect.clone()))
            }
        };

        tracing::debug!(item = %self.name, user = combatant.name(), ?outcome, "consumable used");
        outcome
    }
}

impl std::fmt::Display for Consumable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            ConsumableKind::Heal(_) => "HEALING",
            ConsumableKind::Boost(..) => "STAT_BOOST",
            ConsumableKind::Effect(_) => "EFFECT_ITEM",
        };
        write!(f, "{} ({kind})", self.name)
    }
}
