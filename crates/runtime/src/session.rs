//! Game session orchestration.
//!
//! A [`GameSession`] owns the player, a shuffled roster of opponent copies,
//! the session random source and the persisted statistics. Every encounter
//! operation addresses an opponent by its roster index and forwards to
//! [`CombatEngine`]; the session itself adds only validation and bookkeeping.

use arena_content::Catalog;
use arena_core::{
    ActionReport, Attribute, AttributeSet, CombatConfig, CombatEngine, Combatant, EffectEvent,
    Intent, Profession, Rejection,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{Result, SessionError};
use crate::repository::StatsStore;
use crate::stats::SessionStats;
use crate::training;

/// An opponent copy together with the attribute it favors in training.
#[derive(Clone, Debug)]
pub struct RosterEntry {
    pub combatant: Combatant,
    pub specialization: Attribute,
}

pub struct GameSession {
    catalog: Catalog,
    engine: CombatEngine,
    player: Option<Combatant>,
    roster: Vec<RosterEntry>,
    rng: StdRng,
    stats: SessionStats,
    store: Box<dyn StatsStore>,
}

impl GameSession {
    /// Create a session with an entropy-seeded random source.
    pub fn new(catalog: Catalog, config: CombatConfig, store: impl StatsStore + 'static) -> Self {
        Self::with_rng(catalog, config, store, StdRng::from_entropy())
    }

    /// Create a session whose rolls and roster order are reproducible.
    pub fn with_seed(
        catalog: Catalog,
        config: CombatConfig,
        store: impl StatsStore + 'static,
        seed: u64,
    ) -> Self {
        Self::with_rng(catalog, config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        catalog: Catalog,
        config: CombatConfig,
        store: impl StatsStore + 'static,
        rng: StdRng,
    ) -> Self {
        let stats = store.load_or_default();
        Self {
            catalog,
            engine: CombatEngine::new(config),
            player: None,
            roster: Vec::new(),
            rng,
            stats,
            store: Box::new(store),
        }
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Create the player and a freshly shuffled roster.
    ///
    /// Fails if a player already exists; call [`reset`](Self::reset) first.
    pub fn initialize(&mut self, name: &str, profession: Profession) -> Result<()> {
        if self.player.is_some() {
            return Err(SessionError::PlayerExists);
        }

        let loadout = self
            .catalog
            .loadout(profession)
            .ok_or(SessionError::MissingLoadout(profession))?;
        let attributes = AttributeSet::from_base(self.catalog.player_attributes());
        let player = Combatant::player(name, profession, attributes, loadout.clone());

        tracing::info!(player = %player, %profession, "player created");
        self.player = Some(player);
        self.shuffle_roster();
        Ok(())
    }

    /// Discard the player and reshuffle fresh opponent copies.
    pub fn reset(&mut self) {
        self.player = None;
        self.shuffle_roster();
        tracing::debug!("session reset");
    }

    fn shuffle_roster(&mut self) {
        let mut roster: Vec<RosterEntry> = self
            .catalog
            .opponents()
            .iter()
            .map(|template| RosterEntry {
                combatant: template.spawn(),
                specialization: template.specialization,
            })
            .collect();
        roster.shuffle(&mut self.rng);
        self.roster = roster;
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn engine(&self) -> &CombatEngine {
        &self.engine
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn player(&self) -> Option<&Combatant> {
        self.player.as_ref()
    }

    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    pub fn opponent_count(&self) -> usize {
        self.roster.len()
    }

    pub fn opponent(&self, index: usize) -> Result<&Combatant> {
        entry(&self.roster, index).map(|entry| &entry.combatant)
    }

    fn require_player(&self) -> Result<&Combatant> {
        self.player.as_ref().ok_or(SessionError::NoPlayer)
    }

    // ------------------------------------------------------------------------
    // Training
    // ------------------------------------------------------------------------

    /// Train the player's attribute named `attribute` (e.g. `"STR"`).
    pub fn train(&mut self, attribute: &str, amount: u32) -> Result<Attribute> {
        let attribute = training::parse_attribute(attribute)?;
        let player = self.player.as_mut().ok_or(SessionError::NoPlayer)?;
        training::train(player, attribute, amount)?;
        Ok(attribute)
    }

    /// Train an opponent by weighted roll; returns the trained attribute.
    pub fn train_opponent(&mut self, index: usize, amount: u32) -> Result<Attribute> {
        let Self { roster, rng, .. } = self;
        let entry = entry_mut(roster, index)?;
        training::train_weighted(&mut entry.combatant, entry.specialization, amount, rng)
    }

    pub fn opponent_specialization(&self, index: usize) -> Result<Attribute> {
        entry(&self.roster, index).map(|entry| entry.specialization)
    }

    /// The opponent's strongest base attribute.
    pub fn opponent_dominant_attribute(&self, index: usize) -> Result<Attribute> {
        self.opponent(index)
            .map(|opponent| training::dominant_attribute(&opponent.attributes().base()))
    }

    pub fn random_training_cycles(&mut self) -> u32 {
        training::random_training_cycles(&mut self.rng)
    }

    // ------------------------------------------------------------------------
    // Encounter
    // ------------------------------------------------------------------------

    /// Restore both sides to a clean state before an encounter.
    pub fn prepare_encounter(&mut self, index: usize) -> Result<Vec<EffectEvent>> {
        let Self {
            engine,
            player,
            roster,
            ..
        } = self;
        let (player, opponent) = fighters(player, roster, index)?;
        Ok(engine.prepare_encounter(player, opponent))
    }

    /// Turn-start bookkeeping for both sides of an interactive encounter.
    pub fn begin_round(&mut self, index: usize) -> Result<Vec<EffectEvent>> {
        let Self { player, roster, .. } = self;
        let (player, opponent) = fighters(player, roster, index)?;
        let mut events = player.begin_turn();
        events.extend(opponent.begin_turn());
        Ok(events)
    }

    pub fn player_attack(&mut self, action: usize, index: usize) -> Result<ActionReport> {
        let Self {
            engine,
            player,
            roster,
            rng,
            ..
        } = self;
        let (player, opponent) = fighters(player, roster, index)?;
        Ok(engine.resolve_player_action(player, opponent, action, rng)?)
    }

    pub fn opponent_attack(&mut self, index: usize) -> Result<ActionReport> {
        let Self {
            engine,
            player,
            roster,
            rng,
            ..
        } = self;
        let (player, opponent) = fighters(player, roster, index)?;
        Ok(engine.resolve_opponent_action(player, opponent, rng))
    }

    /// What the opponent would do if it acted now.
    pub fn opponent_intent(&self, index: usize) -> Result<Intent> {
        let player = self.require_player()?;
        let opponent = self.opponent(index)?;
        Ok(self.engine.preview_opponent_intent(player, opponent))
    }

    /// Auto-play an encounter, the player always picking its strongest
    /// usable action.
    pub fn simulate_encounter(&mut self, index: usize) -> Result<bool> {
        let count = self.require_player()?.actions().len();
        let priorities: Vec<usize> = (0..count).rev().collect();
        self.simulate_encounter_with(index, &priorities)
    }

    /// Auto-play an encounter, the player using the first usable action in
    /// `priorities`.
    pub fn simulate_encounter_with(&mut self, index: usize, priorities: &[usize]) -> Result<bool> {
        let Self {
            engine,
            player,
            roster,
            rng,
            ..
        } = self;
        let (player, opponent) = fighters(player, roster, index)?;
        Ok(engine.simulate_encounter(player, opponent, priorities, rng))
    }

    /// Remaining cooldown of the player's action at `action`.
    pub fn player_cooldown(&self, action: usize) -> Result<u32> {
        let player = self.require_player()?;
        let action = player
            .action(action)
            .ok_or(Rejection::UnknownAction { index: action })?;
        Ok(player.cooldown(action.id()))
    }

    /// Whether the player may use the action at `action` right now.
    pub fn can_use(&self, action: usize) -> bool {
        self.player.as_ref().is_some_and(|player| {
            player
                .action(action)
                .is_some_and(|action| action.is_usable(player))
        })
    }

    // ------------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------------

    pub fn record_victory(&mut self) -> Result<()> {
        self.record_game(true)
    }

    pub fn record_defeat(&mut self) -> Result<()> {
        self.record_game(false)
    }

    /// Record the current player's result and persist the statistics.
    ///
    /// A failed save is logged and otherwise ignored.
    fn record_game(&mut self, won: bool) -> Result<()> {
        let player = self.player.as_ref().ok_or(SessionError::NoPlayer)?;
        let profession = player.profession().ok_or(SessionError::NoPlayer)?;
        self.stats
            .record_game(won, profession, player.attributes().base());

        tracing::info!(
            player = player.name(),
            won,
            games = self.stats.games_played,
            "game recorded"
        );
        if let Err(error) = self.store.save(&self.stats) {
            tracing::warn!(%error, "could not save statistics");
        }
        Ok(())
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn motivational_message(&self) -> &'static str {
        self.stats.motivational_message()
    }
}

fn entry(roster: &[RosterEntry], index: usize) -> Result<&RosterEntry> {
    roster.get(index).ok_or(SessionError::UnknownOpponent {
        index,
        count: roster.len(),
    })
}

fn entry_mut(roster: &mut [RosterEntry], index: usize) -> Result<&mut RosterEntry> {
    let count = roster.len();
    roster
        .get_mut(index)
        .ok_or(SessionError::UnknownOpponent { index, count })
}

fn fighters<'a>(
    player: &'a mut Option<Combatant>,
    roster: &'a mut [RosterEntry],
    index: usize,
) -> Result<(&'a mut Combatant, &'a mut Combatant)> {
    let player = player.as_mut().ok_or(SessionError::NoPlayer)?;
    let opponent = &mut entry_mut(roster, index)?.combatant;
    Ok((player, opponent))
}

#[cfg(test)]
mod tests {
    use arena_content::CatalogLoader;
    use arena_core::AttackOutcome;

    use super::*;
    use crate::repository::MemoryStatsStore;

    fn session() -> GameSession {
        let catalog = CatalogLoader::stock().unwrap();
        GameSession::with_seed(catalog, CombatConfig::default(), MemoryStatsStore::new(), 7)
    }

    fn started() -> GameSession {
        let mut session = session();
        session.initialize("Hero", Profession::Warrior).unwrap();
        session
    }

    #[test]
    fn initialize_only_once() {
        let mut session = started();
        assert_eq!(
            session.initialize("Again", Profession::Mage),
            Err(SessionError::PlayerExists)
        );
        assert_eq!(session.opponent_count(), 3);
    }

    #[test]
    fn operations_without_player_fail() {
        let mut session = session();
        assert_eq!(session.train("STR", 5), Err(SessionError::NoPlayer));
        assert_eq!(session.record_victory(), Err(SessionError::NoPlayer));
        assert!(!session.can_use(0));
    }

    #[test]
    fn roster_copies_do_not_share_state_with_the_catalog() {
        let mut session = started();
        session.train_opponent(0, 10).unwrap();
        let name = session.opponent(0).unwrap().name().to_owned();
        let template = session.catalog().opponent(&name).unwrap();

        let trained = session.opponent(0).unwrap().attributes().base().total();
        assert_eq!(trained, template.attributes.total() + 10);
    }

    #[test]
    fn unknown_opponent_index_is_rejected() {
        let mut session = started();
        assert_eq!(
            session.opponent_attack(9).unwrap_err(),
            SessionError::UnknownOpponent { index: 9, count: 3 }
        );
    }

    #[test]
    fn player_attack_on_cooldown_is_rejected() {
        let mut session = started();
        session.prepare_encounter(0).unwrap();

        // Slash (index 1) starts a cooldown on hit and on miss alike.
        session.player_attack(1, 0).unwrap();
        assert!(!session.can_use(1));
        assert!(session.player_cooldown(1).unwrap() > 0);
        assert!(matches!(
            session.player_attack(1, 0),
            Err(SessionError::Rejected(Rejection::OnCooldown { .. }))
        ));
    }

    #[test]
    fn begin_round_ticks_player_cooldowns() {
        let mut session = started();
        session.prepare_encounter(0).unwrap();
        let report = session.player_attack(2, 0).unwrap();
        assert!(matches!(report.outcome, AttackOutcome::Hit | AttackOutcome::Miss));

        let before = session.player_cooldown(2).unwrap();
        session.begin_round(0).unwrap();
        assert_eq!(session.player_cooldown(2).unwrap(), before - 1);
    }

    #[test]
    fn unknown_player_action_is_rejected() {
        let session = started();
        assert_eq!(
            session.player_cooldown(7),
            Err(SessionError::Rejected(Rejection::UnknownAction { index: 7 }))
        );
    }

    #[test]
    fn opponent_intent_names_a_roster_action() {
        let session = started();
        let opponent = session.opponent(0).unwrap();
        match session.opponent_intent(0).unwrap() {
            Intent::Action(name) => assert!(opponent.actions().iter().any(|a| a.name() == name)),
            Intent::BasicAttack => panic!("fresh opponent should have a ready action"),
        }
    }

    #[test]
    fn recording_updates_stats_and_store() {
        let mut session = started();
        session.record_victory().unwrap();
        session.record_defeat().unwrap();

        let stats = session.stats();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.best_profession, Some(Profession::Warrior));
        assert_eq!(session.store.load().unwrap(), *stats);
    }

    #[test]
    fn reset_allows_a_new_player() {
        let mut session = started();
        session.reset();
        assert!(session.player().is_none());
        session.initialize("Second", Profession::Rogue).unwrap();
        assert_eq!(session.player().unwrap().profession(), Some(Profession::Rogue));
    }
}
