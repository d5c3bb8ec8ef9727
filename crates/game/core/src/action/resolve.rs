//! Usability checks and unconditional execution of an action.
//!
//! [`Action::execute`] assumes the hit already landed. Hit rolls and the
//! miss path live in [`crate::engine`], which is the only caller that should
//! drive actions during an encounter.

use crate::combat::action_damage;
use crate::state::Combatant;

use super::{Action, Rejection};

impl Action {
    /// Check whether `user` may use this action right now.
    pub fn check_usable(&self, user: &Combatant) -> Result<(), Rejection> {
        if let Some(required) = self.restricted_to
            && user.profession() != Some(required)
        {
            return Err(Rejection::RoleMismatch {
                action: self.name.clone(),
                required,
            });
        }

        match user.cooldown(self.id) {
            0 => Ok(()),
            remaining => Err(Rejection::OnCooldown {
                action: self.name.clone(),
                remaining,
            }),
        }
    }

    pub fn is_usable(&self, user: &Combatant) -> bool {
        self.check_usable(user).is_ok()
    }

    /// Damage this action deals when used by `user`: base power plus power.
    pub fn damage_for(&self, user: &Combatant) -> u32 {
        action_damage(self.base_power, user.attributes().power())
    }

    /// Cooldown applied after use, given the user's cooldown reduction.
    ///
    /// Actions with a base cooldown always cool down for at least one turn.
    pub fn cooldown_for(&self, cooldown_reduction: u32) -> u32 {
        if self.base_cooldown == 0 {
            return 0;
        }
        self.base_cooldown.saturating_sub(cooldown_reduction).max(1)
    }

    /// Apply this action's damage to `target` and start the user's cooldown.
    ///
    /// Returns the damage dealt. If the action is not usable, nothing changes
    /// and 0 is returned.
    pub fn execute(&self, user: &mut Combatant, target: &mut Combatant) -> u32 {
        if !self.is_usable(user) {
            return 0;
        }

        let damage = self.damage_for(user);
        target.attributes_mut().apply_damage(damage);
        self.start_cooldown(user);
        damage
    }

    /// Put the action on cooldown for `user` as if it had been used.
    pub(crate) fn start_cooldown(&self, user: &mut Combatant) {
        let turns = self.cooldown_for(user.attributes().cooldown_reduction());
        user.set_cooldown(self.id, turns);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::action::ActionId;
    use crate::state::{Archetype, Profession};
    use crate::stats::AttributeSet;

    fn warrior(actions: Vec<Action>) -> Combatant {
        Combatant::player(
            "Hero",
            Profession::Warrior,
            AttributeSet::new(20, 0, 20),
            Arc::from(actions),
        )
    }

    fn dummy() -> Combatant {
        Combatant::opponent(
            "Dummy",
            Archetype::Standard,
            AttributeSet::new(50, 0, 0),
            Arc::from(Vec::new()),
        )
    }

    #[test]
    fn execute_deals_base_plus_power_and_sets_cooldown() {
        let slash = Action::new(ActionId(1), "Slash", 10, 3);
        let mut user = warrior(vec![slash.clone()]);
        let mut target = dummy();

        let damage = slash.execute(&mut user, &mut target);
        assert_eq!(damage, 30);
        assert_eq!(target.attributes().current_hp(), 210 - 30);
        assert_eq!(user.cooldown(slash.id()), 3);
    }

    #[test]
    fn execute_on_cooldown_changes_nothing() {
        let slash = Action::new(ActionId(1), "Slash", 10, 3);
        let mut user = warrior(vec![slash.clone()]);
        let mut target = dummy();
        user.set_cooldown(slash.id(), 2);

        assert_eq!(slash.execute(&mut user, &mut target), 0);
        assert!(target.attributes().is_at_full_health());
        assert_eq!(user.cooldown(slash.id()), 2);
    }

    #[test]
    fn zero_cooldown_action_stays_ready() {
        let strike = Action::new(ActionId(1), "Strike", 10, 0);
        let mut user = warrior(vec![strike.clone()]);
        let mut target = dummy();
        strike.execute(&mut user, &mut target);
        assert!(strike.is_usable(&user));
    }

    #[test]
    fn cooldown_reduction_never_drops_below_one_turn() {
        let nova = Action::new(ActionId(1), "Nova", 50, 3);
        assert_eq!(nova.cooldown_for(0), 3);
        assert_eq!(nova.cooldown_for(2), 1);
        assert_eq!(nova.cooldown_for(10), 1);
    }

    #[test]
    fn profession_restriction_is_enforced() {
        let fireball = Action::new(ActionId(7), "Fireball", 25, 3).restricted_to(Profession::Mage);
        let user = warrior(vec![fireball.clone()]);
        assert!(matches!(
            fireball.check_usable(&user),
            Err(Rejection::RoleMismatch { required: Profession::Mage, .. })
        ));
    }

    #[test]
    fn restricted_action_is_unusable_by_opponents() {
        let stab = Action::new(ActionId(2), "Backstab", 22, 2).restricted_to(Profession::Rogue);
        let opponent = dummy();
        assert!(!stab.is_usable(&opponent));
    }
}
