//! Hit chance and accuracy calculations.

use crate::config::CombatConfig;
use crate::rng::RollSource;

/// Calculate hit chance based on accuracy vs evasion.
///
/// # Formula
///
/// ```text
/// hit_chance = accuracy - evasion
/// clamped to [hit_chance_min, hit_chance_max]
/// ```
pub fn hit_chance(accuracy: u32, evasion: u32, config: &CombatConfig) -> u32 {
    let diff = i64::from(accuracy) - i64::from(evasion);
    let clamped = diff
        .max(i64::from(config.hit_chance_min))
        .min(i64::from(config.hit_chance_max));
    // Bounded by hit_chance_max, which is a u32.
    clamped as u32
}

/// `true` if a d100 `roll` lands at or under the hit chance.
pub fn check_hit(accuracy: u32, evasion: u32, roll: u32, config: &CombatConfig) -> bool {
    roll <= hit_chance(accuracy, evasion, config)
}

/// Draw a d100 from `rolls` and check it against the hit chance.
pub fn attempt_hit(
    accuracy: u32,
    evasion: u32,
    config: &CombatConfig,
    rolls: &mut impl RollSource,
) -> bool {
    let roll = rolls.roll_d100();
    let hit = check_hit(accuracy, evasion, roll, config);
    tracing::trace!(
        accuracy,
        evasion,
        roll,
        chance = hit_chance(accuracy, evasion, config),
        hit,
        "hit roll"
    );
    hit
}
