//! End-to-end session flow: create a player, train, fight every opponent,
//! record results and reload statistics from disk.

use arena_content::CatalogLoader;
use arena_core::{CombatConfig, Profession};
use arena_runtime::{FileStatsStore, GameSession, SessionError, StatsStore};
use tempfile::TempDir;

fn session_at(dir: &TempDir, seed: u64) -> GameSession {
    let catalog = CatalogLoader::stock().expect("stock catalog should load");
    let store = FileStatsStore::new(dir.path().join("stats.json"));
    GameSession::with_seed(catalog, CombatConfig::default(), store, seed)
}

#[test]
fn overtrained_player_clears_the_roster() {
    let dir = TempDir::new().unwrap();
    let mut session = session_at(&dir, 42);
    session.initialize("Hero", Profession::Warrior).unwrap();

    // One Strike outdamages every stock opponent's max HP.
    session.train("STR", 480).unwrap();

    for index in 0..session.opponent_count() {
        session.prepare_encounter(index).unwrap();
        let won = session.simulate_encounter(index).unwrap();
        assert!(won, "opponent {index} should fall");
        assert!(session.opponent(index).unwrap().is_defeated());
    }

    session.record_victory().unwrap();
    assert_eq!(session.stats().wins, 1);
    assert_eq!(session.stats().best_power, 500);
}

#[test]
fn statistics_survive_a_new_session() {
    let dir = TempDir::new().unwrap();
    {
        let mut session = session_at(&dir, 1);
        session.initialize("First", Profession::Mage).unwrap();
        session.record_defeat().unwrap();
        session.reset();
        session.initialize("Second", Profession::Rogue).unwrap();
        session.record_victory().unwrap();
    }

    let session = session_at(&dir, 2);
    let stats = session.stats();
    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.losses, 1);
    assert_eq!(stats.best_profession, Some(Profession::Rogue));
    assert_eq!(
        session.motivational_message(),
        "Strong warrior! Victory is within your grasp!"
    );
}

#[test]
fn corrupt_statistics_start_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("stats.json"), "{ broken").unwrap();

    let session = session_at(&dir, 3);
    assert_eq!(session.stats().games_played, 0);

    let store = FileStatsStore::new(dir.path().join("stats.json"));
    assert!(store.load().is_err());
}

#[test]
fn same_seed_gives_the_same_roster_order() {
    let dir = TempDir::new().unwrap();
    let names = |seed| {
        let mut session = session_at(&dir, seed);
        session.initialize("Hero", Profession::Rogue).unwrap();
        session
            .roster()
            .iter()
            .map(|entry| entry.combatant.name().to_owned())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(5), names(5));
}

#[test]
fn training_rejects_bad_input() {
    let dir = TempDir::new().unwrap();
    let mut session = session_at(&dir, 4);
    session.initialize("Hero", Profession::Warrior).unwrap();

    assert_eq!(session.train("LUCK", 5), Err(SessionError::UnknownAttribute("LUCK".into())));
    assert_eq!(session.train("agi", 0), Err(SessionError::InvalidAmount));
    assert_eq!(session.train_opponent(3, 5), Err(SessionError::UnknownOpponent { index: 3, count: 3 }));

    let cycles = session.random_training_cycles();
    assert!((3..=7).contains(&cycles));
}
