//! Temporary effects (buffs and debuffs) on a combatant's attributes.
//!
//! An effect shifts one attribute by a signed magnitude while active and shifts
//! it back by exactly the same amount on expiry.
//!
//! # Turn-based Duration
//!
//! `remaining` counts turns. Each [`TemporaryEffect::tick`] decrements it by one
//! and the effect expires on the tick that brings it to zero, never earlier.

use arrayvec::ArrayVec;
use strum::Display;

use crate::config::CombatConfig;
use crate::stats::{Attribute, AttributeSet};

/// Whether an effect raises or lowers its attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum EffectKind {
    Buff,
    Debuff,
}

/// A timed attribute modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporaryEffect {
    pub name: String,
    pub description: String,
    remaining: u32,
    pub kind: EffectKind,
    pub attribute: Attribute,
    pub magnitude: i32,
}

/// Observable notification emitted when an effect starts or ends.
///
/// Presentation layers render these; the engine never reads them back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectEvent {
    Applied {
        name: String,
        description: String,
        attribute: Attribute,
        /// Signed change applied to the attribute.
        value: i32,
        duration: u32,
    },
    Expired {
        name: String,
        attribute: Attribute,
        /// Signed change removed from the attribute.
        value: i32,
    },
}

impl TemporaryEffect {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        duration: u32,
        kind: EffectKind,
        attribute: Attribute,
        magnitude: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            remaining: duration,
            kind,
            attribute,
            magnitude,
        }
    }

    pub fn buff(name: impl Into<String>, attribute: Attribute, magnitude: i32, duration: u32) -> Self {
        let name = name.into();
        let description = format!("+{magnitude} {attribute}");
        Self::new(name, description, duration, EffectKind::Buff, attribute, magnitude)
    }

    pub fn debuff(name: impl Into<String>, attribute: Attribute, magnitude: i32, duration: u32) -> Self {
        let name = name.into();
        let description = format!("-{magnitude} {attribute}");
        Self::new(name, description, duration, EffectKind::Debuff, attribute, magnitude)
    }

    /// Turns left before expiry.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// The magnitude with the sign the effect applies (negated for debuffs).
    pub fn signed_magnitude(&self) -> i32 {
        match self.kind {
            EffectKind::Buff => self.magnitude,
            EffectKind::Debuff => self.magnitude.saturating_neg(),
        }
    }

    /// Add the signed magnitude to the target attribute.
    pub fn apply(&self, attributes: &mut AttributeSet) -> EffectEvent {
        let value = self.signed_magnitude();
        attributes.shift(self.attribute, value);

        tracing::debug!(
            "effect {} applied: {:+} {} for {} turns",
            self.name,
            value,
            self.attribute,
            self.remaining
        );

        EffectEvent::Applied {
            name: self.name.clone(),
            description: self.description.clone(),
            attribute: self.attribute,
            value,
            duration: self.remaining,
        }
    }

    /// Count down one turn; expires the effect when the countdown hits zero.
    pub fn tick(&mut self, attributes: &mut AttributeSet) -> Option<EffectEvent> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        (self.remaining == 0).then(|| self.expire(attributes))
    }

    /// Remove the signed magnitude from the target attribute.
    pub fn expire(&self, attributes: &mut AttributeSet) -> EffectEvent {
        let value = self.signed_magnitude();
        attributes.shift(self.attribute, value.saturating_neg());

        tracing::debug!("effect {} expired", self.name);

        EffectEvent::Expired {
            name: self.name.clone(),
            attribute: self.attribute,
            value,
        }
    }
}

impl std::fmt::Display for TemporaryEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} {} {:+} for {} turns)",
            self.name, self.kind, self.attribute, self.magnitude, self.remaining
        )
    }
}

/// Effects currently active on one combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveEffects {
    effects: ArrayVec<TemporaryEffect, { CombatConfig::MAX_ACTIVE_EFFECTS }>,
}

impl ActiveEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply and start tracking an effect.
    ///
    /// Zero-duration effects and effects beyond capacity are ignored and
    /// leave the attributes untouched.
    pub fn add(
        &mut self,
        effect: TemporaryEffect,
        attributes: &mut AttributeSet,
    ) -> Option<EffectEvent> {
        if effect.is_expired() || self.effects.is_full() {
            return None;
        }
        let event = effect.apply(attributes);
        self.effects.push(effect);
        Some(event)
    }

    /// Tick every active effect once and drop the ones that expired.
    ///
    /// Every effect present at the start of the call is ticked exactly once.
    pub fn update(&mut self, attributes: &mut AttributeSet) -> Vec<EffectEvent> {
        let events = self
            .effects
            .iter_mut()
            .filter_map(|effect| effect.tick(attributes))
            .collect();
        self.effects.retain(|effect| !effect.is_expired());
        events
    }

    /// Expire every effect immediately.
    pub fn clear(&mut self, attributes: &mut AttributeSet) -> Vec<EffectEvent> {
        self.effects
            .drain(..)
            .map(|effect| effect.expire(attributes))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemporaryEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buff_raises_attribute_until_expiry() {
        let mut attributes = AttributeSet::new(20, 20, 20);
        let mut effect = TemporaryEffect::buff("Rage", Attribute::Power, 10, 2);

        effect.apply(&mut attributes);
        assert_eq!(attributes.power(), 30);

        assert!(effect.tick(&mut attributes).is_none());
        assert_eq!(attributes.power(), 30);

        let event = effect.tick(&mut attributes);
        assert!(matches!(event, Some(EffectEvent::Expired { value: 10, .. })));
        assert_eq!(attributes.power(), 20);
        assert!(effect.is_expired());
    }

    #[test]
    fn power_debuff_never_heals_a_wounded_target() {
        let mut attributes = AttributeSet::new(20, 20, 20);
        attributes.apply_damage(110);
        let mut active = ActiveEffects::new();

        active.add(TemporaryEffect::debuff("Weaken", Attribute::Power, 10, 1), &mut attributes);
        assert_eq!(attributes.current_hp(), 1);

        let events = active.update(&mut attributes);
        assert_eq!(events.len(), 1);
        assert!(active.is_empty());
        assert_eq!(attributes.current_hp(), 10);
    }

    #[test]
    fn debuff_round_trip_nets_zero() {
        let mut attributes = AttributeSet::new(20, 20, 20);
        let before = attributes.clone();
        let mut effect = TemporaryEffect::debuff("Slow", Attribute::Agility, 15, 3);

        let applied = effect.apply(&mut attributes);
        assert!(matches!(applied, EffectEvent::Applied { value: -15, duration: 3, .. }));
        assert_eq!(attributes.agility(), 5);

        for _ in 0..3 {
            effect.tick(&mut attributes);
        }
        assert_eq!(attributes, before);
    }

    #[test]
    fn tick_after_expiry_is_a_no_op() {
        let mut attributes = AttributeSet::new(20, 20, 20);
        let mut effect = TemporaryEffect::buff("Focus", Attribute::Focus, 4, 1);
        effect.apply(&mut attributes);
        effect.tick(&mut attributes);
        assert!(effect.tick(&mut attributes).is_none());
        assert_eq!(attributes.focus(), 20);
    }

    #[test]
    fn update_ticks_every_effect_and_drops_expired() {
        let mut attributes = AttributeSet::new(20, 20, 20);
        let mut effects = ActiveEffects::new();
        effects.add(TemporaryEffect::buff("Short", Attribute::Power, 5, 1), &mut attributes);
        effects.add(TemporaryEffect::buff("Also short", Attribute::Power, 5, 1), &mut attributes);
        effects.add(TemporaryEffect::buff("Long", Attribute::Agility, 5, 3), &mut attributes);
        assert_eq!(attributes.power(), 30);

        let events = effects.update(&mut attributes);
        assert_eq!(events.len(), 2);
        assert_eq!(effects.len(), 1);
        assert_eq!(attributes.power(), 20);
        assert_eq!(attributes.agility(), 25);
        assert_eq!(effects.iter().next().map(TemporaryEffect::remaining), Some(2));
    }

    #[test]
    fn zero_duration_effect_is_ignored() {
        let mut attributes = AttributeSet::new(20, 20, 20);
        let mut effects = ActiveEffects::new();
        let event = effects.add(TemporaryEffect::buff("Blink", Attribute::Power, 50, 0), &mut attributes);
        assert!(event.is_none());
        assert!(effects.is_empty());
        assert_eq!(attributes.power(), 20);
    }

    #[test]
    fn clear_reverts_all_effects() {
        let mut attributes = AttributeSet::new(20, 20, 20);
        let before = attributes.clone();
        let mut effects = ActiveEffects::new();
        effects.add(TemporaryEffect::buff("A", Attribute::Power, 7, 4), &mut attributes);
        effects.add(TemporaryEffect::debuff("B", Attribute::Focus, 3, 2), &mut attributes);

        let events = effects.clear(&mut attributes);
        assert_eq!(events.len(), 2);
        assert!(effects.is_empty());
        assert_eq!(attributes, before);
    }
}
