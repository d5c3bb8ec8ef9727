//! Damage calculation.
//!
//! Damage is flat and additive. There is no mitigation stat.

/// Damage of an action: `base_power + power`.
pub fn action_damage(base_power: u32, power: u32) -> u32 {
    base_power.saturating_add(power)
}

/// Damage of the fallback basic attack: the attacker's raw power.
pub fn basic_attack_damage(power: u32) -> u32 {
    power
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_damage_is_flat_sum() {
        assert_eq!(action_damage(10, 20), 30);
        assert_eq!(action_damage(42, 15), 57);
        assert_eq!(action_damage(u32::MAX, 1), u32::MAX);
    }
}
