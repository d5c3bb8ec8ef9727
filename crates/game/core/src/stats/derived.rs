//! Derived Stats - combat statistics computed from the three base attributes.
//!
//! These are NOT stored independently - always recomputed from the effective
//! attributes whenever an attribute changes.
//!
//! Components: MaxHP, Evasion, Accuracy, CooldownReduction, Speed

/// Derived combat statistics.
///
/// A pure function of (power, agility, focus). Every component is truncated
/// toward zero and never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// Maximum hit points
    pub max_hp: u32,

    /// Dodge rating subtracted from the attacker's accuracy
    pub evasion: u32,

    /// Hit rating (hit chance before evasion)
    pub accuracy: u32,

    /// Turns shaved off every action cooldown
    pub cooldown_reduction: u32,

    /// Action points accrued per turn-loop iteration
    pub speed: u32,
}

impl DerivedStats {
    pub const BASE_HP: u32 = 60;
    pub const HP_PER_POWER: u32 = 3;
    pub const BASE_ACCURACY: u32 = 75;
    pub const ACCURACY_SCALER: f64 = 2.2;
    pub const EVASION_SCALER: f64 = 1.8;
    pub const SPEED_SCALER: f64 = 1.5;
    pub const COOLDOWN_SCALER: f64 = 0.5;
    /// Focus up to this value grants no cooldown reduction.
    pub const COOLDOWN_FOCUS_BASELINE: u32 = 20;

    /// Compute derived stats from effective attributes.
    ///
    /// Formulas:
    /// - MaxHP: 60 + power × 3
    /// - Evasion: √agility × 1.8
    /// - Accuracy: 75 + √focus × 2.2
    /// - CooldownReduction: √(focus - 20) × 0.5, zero at or below 20 focus
    /// - Speed: √agility × 1.5
    pub fn compute(power: u32, agility: u32, focus: u32) -> Self {
        let focus_above_baseline = focus.saturating_sub(Self::COOLDOWN_FOCUS_BASELINE);

        Self {
            max_hp: Self::BASE_HP.saturating_add(power.saturating_mul(Self::HP_PER_POWER)),
            evasion: scaled_sqrt(agility, Self::EVASION_SCALER),
            accuracy: Self::BASE_ACCURACY.saturating_add(scaled_sqrt(focus, Self::ACCURACY_SCALER)),
            cooldown_reduction: scaled_sqrt(focus_above_baseline, Self::COOLDOWN_SCALER),
            speed: scaled_sqrt(agility, Self::SPEED_SCALER),
        }
    }
}

/// Shorthand for [`DerivedStats::compute`].
pub fn derive_stats(power: u32, agility: u32, focus: u32) -> DerivedStats {
    DerivedStats::compute(power, agility, focus)
}

/// Diminishing-returns curve: `⌊√value × scaler⌋`.
fn scaled_sqrt(value: u32, scaler: f64) -> u32 {
    (f64::from(value).sqrt() * scaler) as u32
}
