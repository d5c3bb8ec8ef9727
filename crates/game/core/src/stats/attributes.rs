//! Base attributes and the attribute set that owns a combatant's hit points.
//!
//! The three base attributes (power, agility, focus) are the Single Source of
//! Truth. Temporary effects contribute a signed modifier on top of them; the
//! effective value (`base + modifier`, floored at zero) feeds
//! [`DerivedStats::compute`]. Only current HP is stored next to them.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::derived::DerivedStats;

/// One of the three base attributes.
///
/// Parses case-insensitively from its name or the short/legacy aliases
/// (`STR`, `STRENGTH`, `AGI`, `INT`, `INTELLIGENCE`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    /// Damage dealt and maximum HP
    #[strum(to_string = "power", serialize = "str", serialize = "strength")]
    Power,
    /// Evasion and turn speed
    #[strum(to_string = "agility", serialize = "agi")]
    Agility,
    /// Accuracy and cooldown reduction
    #[strum(to_string = "focus", serialize = "int", serialize = "intelligence")]
    Focus,
}

/// The stored attribute triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAttributes {
    pub power: u32,
    pub agility: u32,
    pub focus: u32,
}

impl BaseAttributes {
    pub const fn new(power: u32, agility: u32, focus: u32) -> Self {
        Self {
            power,
            agility,
            focus,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Power => self.power,
            Attribute::Agility => self.agility,
            Attribute::Focus => self.focus,
        }
    }

    fn get_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Power => &mut self.power,
            Attribute::Agility => &mut self.agility,
            Attribute::Focus => &mut self.focus,
        }
    }

    /// Sum of all three attributes.
    pub const fn total(&self) -> u32 {
        self.power.saturating_add(self.agility).saturating_add(self.focus)
    }
}

/// Signed adjustments contributed by active temporary effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Modifiers {
    power: i32,
    agility: i32,
    focus: i32,
}

impl Modifiers {
    fn get_mut(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Power => &mut self.power,
            Attribute::Agility => &mut self.agility,
            Attribute::Focus => &mut self.focus,
        }
    }

    const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Power => self.power,
            Attribute::Agility => self.agility,
            Attribute::Focus => self.focus,
        }
    }
}

/// Persistable form of an [`AttributeSet`]: base attributes plus current HP.
///
/// Everything else is recomputed on restore.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSnapshot {
    pub base: BaseAttributes,
    pub current_hp: u32,
}

/// A combatant's attributes, derived stats and current hit points.
///
/// # Invariants
///
/// - `derived` always equals `DerivedStats::compute` of the effective attributes
/// - `current_hp <= derived.max_hp`
/// - `withheld_hp` is HP a shrinking maximum could not take from a combatant
///   left at 1 HP; the next max-HP increase repays it before adding any HP
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeSet {
    base: BaseAttributes,
    modifiers: Modifiers,
    derived: DerivedStats,
    current_hp: u32,
    withheld_hp: u32,
}

impl AttributeSet {
    /// Create an attribute set at full health.
    pub fn new(power: u32, agility: u32, focus: u32) -> Self {
        Self::from_base(BaseAttributes::new(power, agility, focus))
    }

    pub fn from_base(base: BaseAttributes) -> Self {
        let derived = DerivedStats::compute(base.power, base.agility, base.focus);
        Self {
            base,
            modifiers: Modifiers::default(),
            derived,
            current_hp: derived.max_hp,
            withheld_hp: 0,
        }
    }

    /// Rebuild from a snapshot. Current HP is clamped to the recomputed maximum.
    pub fn restore(snapshot: AttributeSnapshot) -> Self {
        let mut set = Self::from_base(snapshot.base);
        set.current_hp = snapshot.current_hp.min(set.derived.max_hp);
        set
    }

    pub fn snapshot(&self) -> AttributeSnapshot {
        AttributeSnapshot {
            base: self.base,
            current_hp: self.current_hp,
        }
    }

    /// Stored attributes, excluding effect modifiers.
    pub fn base(&self) -> BaseAttributes {
        self.base
    }

    /// Effective value of an attribute (base plus active effects, floored at zero).
    pub fn get(&self, attribute: Attribute) -> u32 {
        let value = i64::from(self.base.get(attribute)) + i64::from(self.modifiers.get(attribute));
        value.clamp(0, i64::from(u32::MAX)) as u32
    }

    pub fn power(&self) -> u32 {
        self.get(Attribute::Power)
    }

    pub fn agility(&self) -> u32 {
        self.get(Attribute::Agility)
    }

    pub fn focus(&self) -> u32 {
        self.get(Attribute::Focus)
    }

    /// Effective attribute triple.
    pub fn effective(&self) -> BaseAttributes {
        BaseAttributes::new(self.power(), self.agility(), self.focus())
    }

    pub fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    pub fn max_hp(&self) -> u32 {
        self.derived.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn evasion(&self) -> u32 {
        self.derived.evasion
    }

    pub fn accuracy(&self) -> u32 {
        self.derived.accuracy
    }

    pub fn cooldown_reduction(&self) -> u32 {
        self.derived.cooldown_reduction
    }

    pub fn speed(&self) -> u32 {
        self.derived.speed
    }

    /// Permanently raise a base attribute.
    ///
    /// A zero amount is a no-op. If max HP grows, current HP grows by the same
    /// delta so the missing-HP gap is preserved rather than healed.
    pub fn increase(&mut self, attribute: Attribute, amount: u32) {
        if amount == 0 {
            return;
        }
        let slot = self.base.get_mut(attribute);
        *slot = slot.saturating_add(amount);
        self.recompute();
    }

    /// Shift an attribute by a signed amount on behalf of a temporary effect.
    ///
    /// Applying `delta` and later `-delta` restores the original effective
    /// value exactly, even if the value was floored at zero in between.
    pub(crate) fn shift(&mut self, attribute: Attribute, delta: i32) {
        if delta == 0 {
            return;
        }
        let slot = self.modifiers.get_mut(attribute);
        *slot = slot.saturating_add(delta);
        self.recompute();
    }

    /// Reduce current HP, floored at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Restore up to `amount` HP, capped at max HP. Returns the HP restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.derived.max_hp - self.current_hp);
        self.current_hp += healed;
        healed
    }

    pub fn full_heal(&mut self) {
        self.current_hp = self.derived.max_hp;
        self.withheld_hp = 0;
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    pub fn is_at_full_health(&self) -> bool {
        self.current_hp == self.derived.max_hp
    }

    fn recompute(&mut self) {
        let old_max = self.derived.max_hp;
        self.derived = DerivedStats::compute(self.power(), self.agility(), self.focus());
        let new_max = self.derived.max_hp;

        // HP follows the max-HP delta in both directions. A shrinking maximum
        // never finishes off a combatant that is still standing; whatever it
        // could not remove is withheld from the next increase instead.
        if new_max >= old_max {
            let gain = new_max - old_max;
            let repaid = gain.min(self.withheld_hp);
            self.withheld_hp -= repaid;
            self.current_hp = self.current_hp.saturating_add(gain - repaid).min(new_max);
        } else if self.current_hp > 0 {
            let loss = old_max - new_max;
            let removed = loss.min(self.current_hp - 1);
            self.withheld_hp = self.withheld_hp.saturating_add(loss - removed);
            self.current_hp -= removed;
        }
        self.current_hp = self.current_hp.min(new_max);
    }
}

impl Default for AttributeSet {
    /// Default stats: 20 in every attribute, full health
    fn default() -> Self {
        Self::new(20, 20, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_starts_at_full_health() {
        let set = AttributeSet::new(20, 20, 20);
        assert_eq!(set.max_hp(), 120);
        assert_eq!(set.current_hp(), 120);
        assert!(set.is_at_full_health());
    }

    #[test]
    fn power_increase_preserves_missing_hp_gap() {
        let mut set = AttributeSet::new(20, 20, 20);
        set.apply_damage(50);
        assert_eq!(set.current_hp(), 70);

        set.increase(Attribute::Power, 10);
        assert_eq!(set.max_hp(), 150);
        assert_eq!(set.current_hp(), 100);
        assert_eq!(set.max_hp() - set.current_hp(), 50);
    }

    #[test]
    fn zero_increase_is_a_no_op() {
        let mut set = AttributeSet::new(20, 20, 20);
        set.increase(Attribute::Power, 5);
        let before = set.clone();
        set.increase(Attribute::Power, 0);
        assert_eq!(set, before);
    }

    #[test]
    fn agility_increase_recomputes_speed_and_evasion() {
        let mut set = AttributeSet::new(0, 0, 0);
        set.increase(Attribute::Agility, 400);
        assert_eq!(set.speed(), 30);
        assert_eq!(set.evasion(), 36);
        assert_eq!(set.max_hp(), 60);
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut set = AttributeSet::new(0, 0, 0);
        set.apply_damage(1_000);
        assert_eq!(set.current_hp(), 0);
        assert!(set.is_defeated());
    }

    #[test]
    fn full_heal_restores_max() {
        let mut set = AttributeSet::new(10, 0, 0);
        set.apply_damage(40);
        set.full_heal();
        assert_eq!(set.current_hp(), set.max_hp());
    }

    #[test]
    fn heal_caps_at_max_hp() {
        let mut set = AttributeSet::new(0, 0, 0);
        set.apply_damage(10);
        assert_eq!(set.heal(25), 10);
        assert!(set.is_at_full_health());
    }

    #[test]
    fn shift_round_trip_restores_effective_value() {
        let mut set = AttributeSet::new(5, 0, 0);
        set.shift(Attribute::Power, -12);
        assert_eq!(set.power(), 0);
        set.shift(Attribute::Power, 12);
        assert_eq!(set.power(), 5);
        assert_eq!(set.max_hp(), 75);
    }

    #[test]
    fn shrinking_max_hp_clamps_current_hp() {
        let mut set = AttributeSet::new(20, 0, 0);
        set.shift(Attribute::Power, -10);
        assert_eq!(set.max_hp(), 90);
        assert_eq!(set.current_hp(), 90);
    }

    #[test]
    fn shrinking_max_hp_keeps_combatant_standing() {
        let mut set = AttributeSet::new(20, 0, 0);
        set.apply_damage(110);
        set.shift(Attribute::Power, -10);
        assert_eq!(set.current_hp(), 1);
        assert!(!set.is_defeated());
    }

    #[test]
    fn debuff_cycle_on_wounded_target_restores_exact_hp() {
        let mut set = AttributeSet::new(20, 20, 20);
        set.apply_damage(110);
        assert_eq!(set.current_hp(), 10);

        set.shift(Attribute::Power, -10);
        assert_eq!(set.current_hp(), 1);
        set.shift(Attribute::Power, 10);
        assert_eq!(set.current_hp(), 10);
        assert_eq!(set.max_hp(), 120);
    }

    #[test]
    fn full_heal_forgets_withheld_hp() {
        let mut set = AttributeSet::new(20, 0, 0);
        set.apply_damage(115);
        set.shift(Attribute::Power, -10);
        set.full_heal();
        set.shift(Attribute::Power, 10);
        assert!(set.is_at_full_health());
    }

    #[test]
    fn shift_round_trip_preserves_damaged_hp() {
        let mut set = AttributeSet::new(20, 0, 0);
        set.apply_damage(50);
        set.shift(Attribute::Power, 10);
        assert_eq!(set.current_hp(), 100);
        set.shift(Attribute::Power, -10);
        assert_eq!(set.current_hp(), 70);
    }

    #[test]
    fn snapshot_restores_base_and_hp() {
        let mut set = AttributeSet::new(12, 7, 30);
        set.apply_damage(9);
        let restored = AttributeSet::restore(set.snapshot());
        assert_eq!(restored, set);
    }

    #[test]
    fn attribute_parses_aliases_case_insensitively() {
        assert_eq!("STR".parse::<Attribute>(), Ok(Attribute::Power));
        assert_eq!("Strength".parse::<Attribute>(), Ok(Attribute::Power));
        assert_eq!("agi".parse::<Attribute>(), Ok(Attribute::Agility));
        assert_eq!("INTELLIGENCE".parse::<Attribute>(), Ok(Attribute::Focus));
        assert_eq!("focus".parse::<Attribute>(), Ok(Attribute::Focus));
        assert!("luck".parse::<Attribute>().is_err());
    }
}
