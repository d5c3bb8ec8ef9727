//! Catalog loader.

use std::path::Path;

use crate::catalog::{Catalog, CatalogSpec};
use crate::loaders::{LoadResult, read_file};

const STOCK_CATALOG: &str = include_str!("../../data/catalog.ron");

/// Loader for opponent rosters and profession loadouts from RON.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and build a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {:#}", path.display(), e))
    }

    /// Parse and build a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let spec: CatalogSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        Catalog::build(spec)
    }

    /// The catalog compiled into the binary.
    pub fn stock() -> LoadResult<Catalog> {
        Self::parse(STOCK_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{Archetype, Attribute, Profession};

    use super::*;

    #[test]
    fn stock_catalog_has_three_professions_and_three_opponents() {
        let catalog = CatalogLoader::stock().unwrap();
        for profession in [Profession::Warrior, Profession::Mage, Profession::Rogue] {
            assert_eq!(catalog.loadout(profession).map(|l| l.len()), Some(3));
        }
        assert_eq!(catalog.opponents().len(), 3);
        assert_eq!(catalog.player_attributes().total(), 60);
    }

    #[test]
    fn stock_minotaur_is_an_executioner() {
        let catalog = CatalogLoader::stock().unwrap();
        let minotaur = catalog.opponent("Minotaur").unwrap();
        assert_eq!(minotaur.archetype, Archetype::Executioner);
        assert_eq!(minotaur.specialization, Attribute::Power);
        assert_eq!(minotaur.attributes.power, 30);
        let ultimate = &minotaur.actions[2];
        assert_eq!((ultimate.name(), ultimate.base_power(), ultimate.base_cooldown()), ("Earthquake", 42, 3));
    }

    #[test]
    fn stock_mage_loadout_matches_data() {
        let catalog = CatalogLoader::stock().unwrap();
        let names: Vec<_> = catalog
            .loadout(Profession::Mage)
            .unwrap()
            .iter()
            .map(|a| a.name().to_owned())
            .collect();
        assert_eq!(names, ["Magic Bolt", "Fireball", "Meteor Strike"]);
    }

    #[test]
    fn malformed_ron_is_reported() {
        let err = CatalogLoader::parse("(player_attributes: nope)").unwrap_err();
        assert!(err.to_string().contains("catalog RON"));
    }
}
