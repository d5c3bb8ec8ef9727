/// Combat tuning parameters consumed by the engine.
///
/// Defaults reproduce the stock balance; content files may override any field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Action points a combatant must accrue before taking a turn.
    pub action_threshold: u32,
    /// Hard cap on turn-loop iterations in automated simulation.
    pub max_iterations: u32,
    /// Lowest possible hit chance in percent.
    pub hit_chance_min: u32,
    /// Highest possible hit chance in percent.
    pub hit_chance_max: u32,
}

impl CombatConfig {
    // ===== compile-time constants =====
    pub const MAX_ACTIVE_EFFECTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ACTION_THRESHOLD: u32 = 100;
    pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
    pub const DEFAULT_HIT_CHANCE_MIN: u32 = 5;
    pub const DEFAULT_HIT_CHANCE_MAX: u32 = 95;

    pub const fn new() -> Self {
        Self {
            action_threshold: Self::DEFAULT_ACTION_THRESHOLD,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            hit_chance_min: Self::DEFAULT_HIT_CHANCE_MIN,
            hit_chance_max: Self::DEFAULT_HIT_CHANCE_MAX,
        }
    }

    pub const fn with_action_threshold(mut self, action_threshold: u32) -> Self {
        self.action_threshold = action_threshold;
        self
    }

    pub const fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
