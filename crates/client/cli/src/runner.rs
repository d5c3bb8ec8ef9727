//! The headless game loop.

use anyhow::{Context, Result};
use arena_content::{CatalogLoader, ContentFactory};
use arena_core::{Attribute, CombatConfig, Profession};
use arena_runtime::{FileStatsStore, GameSession};

use crate::config::CliConfig;

pub fn run(config: &CliConfig) -> Result<()> {
    let mut session = build_session(config)?;

    println!("{}", session.stats());
    println!("{}\n", session.motivational_message());

    session
        .initialize(&config.player_name, config.profession)
        .context("failed to create player")?;
    if let Some(player) = session.player() {
        println!("{player} the {} enters the arena.\n", config.profession);
    }

    let won = fight_roster(&mut session, config)?;
    if won {
        println!("Every opponent has fallen. Victory!\n");
        session.record_victory()?;
    } else {
        println!("Defeat.\n");
        session.record_defeat()?;
    }

    println!("{}", session.stats());
    println!("{}", session.motivational_message());
    Ok(())
}

fn build_session(config: &CliConfig) -> Result<GameSession> {
    let (combat, catalog) = match &config.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            (factory.load_config()?, factory.load_catalog()?)
        }
        None => (CombatConfig::default(), CatalogLoader::stock()?),
    };
    let catalog = match &config.catalog_path {
        Some(path) => CatalogLoader::load(path)?,
        None => catalog,
    };

    let store = match &config.stats_path {
        Some(path) => FileStatsStore::new(path),
        None => FileStatsStore::default_location(),
    };
    tracing::info!(stats = %store.path().display(), seed = ?config.seed, "building session");

    Ok(match config.seed {
        Some(seed) => GameSession::with_seed(catalog, combat, store, seed),
        None => GameSession::new(catalog, combat, store),
    })
}

/// Train, then fight each opponent in roster order. Stops at the first loss.
fn fight_roster(session: &mut GameSession, config: &CliConfig) -> Result<bool> {
    for index in 0..session.opponent_count() {
        train_round(session, config)?;

        session.prepare_encounter(index)?;
        let opponent = session.opponent(index)?;
        let archetype = opponent.archetype().unwrap_or_default();
        println!("Encounter {}: {opponent}", index + 1);
        println!("  {}", archetype.description());
        println!("  Opening move: {}", session.opponent_intent(index)?);

        let won = session.simulate_encounter(index)?;
        if let Some(player) = session.player() {
            println!("  {} -> {player}", if won { "won" } else { "lost" });
        }
        if !won {
            return Ok(false);
        }
        println!();
    }
    Ok(true)
}

/// One training phase: every cycle trains the player and every opponent.
fn train_round(session: &mut GameSession, config: &CliConfig) -> Result<()> {
    let cycles = session.random_training_cycles();
    let attribute = favored_attribute(config.profession);

    for _ in 0..cycles {
        session.train(attribute.into(), config.training_amount)?;
        for index in 0..session.opponent_count() {
            session.train_opponent(index, config.training_amount)?;
        }
    }
    println!("Trained {attribute} for {cycles} cycles.");
    Ok(())
}

fn favored_attribute(profession: Profession) -> Attribute {
    match profession {
        Profession::Warrior => Attribute::Power,
        Profession::Rogue => Attribute::Agility,
        Profession::Mage => Attribute::Focus,
    }
}
