//! Encounter resolution.
//!
//! The [`CombatEngine`] holds only configuration. Combatants are passed in by
//! mutable reference and randomness comes from the caller's [`RollSource`],
//! so the same engine serves interactive play and automated simulation.
//!
//! Every action attempt goes through [`CombatEngine::resolve_action`]:
//! usability first, then the hit roll, then damage. A missed action still
//! starts its cooldown.

mod turns;

pub use turns::{ActionMeter, ReadySides, TurnClock};

use crate::action::Rejection;
use crate::combat::{ActionReport, AttackOutcome, Intent, attempt_hit, basic_attack_damage};
use crate::config::CombatConfig;
use crate::policy::choose_action;
use crate::rng::RollSource;
use crate::state::{Combatant, EffectEvent};

/// Stateless resolver for one-on-one encounters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombatEngine {
    config: CombatConfig,
}

impl CombatEngine {
    pub fn new(config: CombatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Reset both sides: cooldowns cleared, effects expired, HP restored.
    pub fn prepare_encounter(
        &self,
        player: &mut Combatant,
        opponent: &mut Combatant,
    ) -> Vec<EffectEvent> {
        let mut events = player.prepare_for_encounter();
        events.extend(opponent.prepare_for_encounter());
        tracing::debug!(player = player.name(), opponent = opponent.name(), "encounter prepared");
        events
    }

    /// Roll to hit `defender` with `attacker`'s accuracy.
    pub fn attempt_hit(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        rolls: &mut impl RollSource,
    ) -> bool {
        attempt_hit(
            attacker.attributes().accuracy(),
            defender.attributes().evasion(),
            &self.config,
            rolls,
        )
    }

    /// Attempt the action at `index` of `actor`'s loadout against `target`.
    ///
    /// Rejections leave both combatants untouched.
    pub fn resolve_action(
        &self,
        actor: &mut Combatant,
        target: &mut Combatant,
        index: usize,
        rolls: &mut impl RollSource,
    ) -> Result<ActionReport, Rejection> {
        if actor.is_defeated() {
            return Err(Rejection::ActorDefeated);
        }
        let action = actor
            .action(index)
            .cloned()
            .ok_or(Rejection::UnknownAction { index })?;
        action.check_usable(actor)?;

        let (outcome, damage) = if self.attempt_hit(actor, target, rolls) {
            (AttackOutcome::Hit, action.execute(actor, target))
        } else {
            action.start_cooldown(actor);
            (AttackOutcome::Miss, 0)
        };

        tracing::debug!(
            actor = actor.name(),
            action = action.name(),
            ?outcome,
            damage,
            cooldown = actor.cooldown(action.id()),
            "action resolved"
        );

        Ok(ActionReport {
            intent: Intent::Action(action.name().to_owned()),
            outcome,
            damage,
            target_defeated: target.is_defeated(),
        })
    }

    /// Player-initiated action. Same contract as [`Self::resolve_action`].
    pub fn resolve_player_action(
        &self,
        player: &mut Combatant,
        opponent: &mut Combatant,
        index: usize,
        rolls: &mut impl RollSource,
    ) -> Result<ActionReport, Rejection> {
        self.resolve_action(player, opponent, index, rolls)
    }

    /// Let `opponent`'s policy pick an action and resolve it against `player`.
    ///
    /// Falls back to a basic attack when no action is ready. A defeated
    /// opponent does nothing: the report is a zero-damage miss.
    pub fn resolve_opponent_action(
        &self,
        player: &mut Combatant,
        opponent: &mut Combatant,
        rolls: &mut impl RollSource,
    ) -> ActionReport {
        if opponent.is_defeated() {
            tracing::debug!(opponent = opponent.name(), "defeated opponent cannot act");
            return ActionReport {
                intent: Intent::BasicAttack,
                outcome: AttackOutcome::Miss,
                damage: 0,
                target_defeated: player.is_defeated(),
            };
        }

        match choose_action(opponent, player) {
            Some(index) => match self.resolve_action(opponent, player, index, rolls) {
                Ok(report) => report,
                Err(rejection) => {
                    tracing::warn!(%rejection, "policy chose an unusable action");
                    self.basic_attack(opponent, player, rolls)
                }
            },
            None => self.basic_attack(opponent, player, rolls),
        }
    }

    /// Attack for raw power, subject to the usual hit roll. No cooldown.
    pub fn basic_attack(
        &self,
        attacker: &mut Combatant,
        target: &mut Combatant,
        rolls: &mut impl RollSource,
    ) -> ActionReport {
        let (outcome, damage) = if self.attempt_hit(attacker, target, rolls) {
            let damage = basic_attack_damage(attacker.attributes().power());
            target.attributes_mut().apply_damage(damage);
            (AttackOutcome::Hit, damage)
        } else {
            (AttackOutcome::Miss, 0)
        };

        tracing::debug!(attacker = attacker.name(), ?outcome, damage, "basic attack");

        ActionReport {
            intent: Intent::BasicAttack,
            outcome,
            damage,
            target_defeated: target.is_defeated(),
        }
    }

    /// What `opponent` would do against `player` right now. Read-only.
    pub fn preview_opponent_intent(&self, player: &Combatant, opponent: &Combatant) -> Intent {
        choose_action(opponent, player)
            .and_then(|index| opponent.action(index))
            .map_or(Intent::BasicAttack, |action| {
                Intent::Action(action.name().to_owned())
            })
    }

    /// Run the full turn loop until one side falls or the iteration cap hits.
    ///
    /// On each of its turns the player uses the first usable action in
    /// `priorities` (loadout indices) and passes if none is usable. Returns
    /// `true` only if the opponent is defeated and the player is not; a
    /// timeout counts as not winning. An empty priority list never wins.
    pub fn simulate_encounter(
        &self,
        player: &mut Combatant,
        opponent: &mut Combatant,
        priorities: &[usize],
        rolls: &mut impl RollSource,
    ) -> bool {
        if priorities.is_empty() {
            return false;
        }

        let mut clock = TurnClock::new(self.config.action_threshold);

        while !player.is_defeated()
            && !opponent.is_defeated()
            && clock.iteration() < self.config.max_iterations
        {
            player.begin_turn();
            opponent.begin_turn();

            let ready = clock.advance(
                player.attributes().speed(),
                opponent.attributes().speed(),
            );

            if ready.player {
                let choice = priorities
                    .iter()
                    .copied()
                    .find(|&index| player.action(index).is_some_and(|a| a.is_usable(player)));
                if let Some(index) = choice
                    && let Ok(report) = self.resolve_action(player, opponent, index, rolls)
                    && report.target_defeated
                {
                    break;
                }
            }

            if ready.opponent {
                let report = self.resolve_opponent_action(player, opponent, rolls);
                if report.target_defeated {
                    break;
                }
            }
        }

        let won = opponent.is_defeated() && !player.is_defeated();
        tracing::info!(
            player = player.name(),
            opponent = opponent.name(),
            iterations = clock.iteration(),
            won,
            "simulation finished"
        );
        won
    }
}
