//! Catalog of opponents and profession loadouts.
//!
//! [`CatalogSpec`] is the serialized form. [`Catalog::build`] validates it and
//! assigns every action a unique [`ActionId`], so cooldowns never collide even
//! when two actions share a name.

use arena_core::{
    Action, ActionId, ActionSet, Archetype, Attribute, AttributeSet, BaseAttributes, Combatant,
    Profession,
};
use serde::{Deserialize, Serialize};

/// Serialized action definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub name: String,
    pub base_power: u32,
    pub base_cooldown: u32,
}

/// Serialized profession loadout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutSpec {
    pub profession: Profession,
    pub actions: Vec<ActionSpec>,
}

/// Serialized opponent template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentSpec {
    pub name: String,
    #[serde(default)]
    pub archetype: Archetype,
    /// Attribute favored by weighted training.
    pub specialization: Attribute,
    pub attributes: BaseAttributes,
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

/// Serialized catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSpec {
    pub player_attributes: BaseAttributes,
    pub professions: Vec<LoadoutSpec>,
    pub opponents: Vec<OpponentSpec>,
}

/// An opponent template with its loadout resolved.
#[derive(Clone, Debug)]
pub struct OpponentTemplate {
    pub name: String,
    pub archetype: Archetype,
    pub specialization: Attribute,
    pub attributes: BaseAttributes,
    pub actions: ActionSet,
}

impl OpponentTemplate {
    /// A fresh combatant sharing this template's loadout.
    pub fn spawn(&self) -> Combatant {
        Combatant::opponent(
            self.name.clone(),
            self.archetype,
            AttributeSet::from_base(self.attributes),
            ActionSet::clone(&self.actions),
        )
    }
}

/// Validated catalog ready for a session.
#[derive(Clone, Debug)]
pub struct Catalog {
    player_attributes: BaseAttributes,
    loadouts: Vec<(Profession, ActionSet)>,
    opponents: Vec<OpponentTemplate>,
}

impl Catalog {
    /// Validate `spec` and assign action identities.
    ///
    /// Fails on duplicate professions, duplicate opponent names or blank names.
    pub fn build(spec: CatalogSpec) -> anyhow::Result<Self> {
        let mut next_id = 0u32;
        let mut assign = |specs: Vec<ActionSpec>, restriction: Option<Profession>| {
            specs
                .into_iter()
                .map(|spec| {
                    anyhow::ensure!(!spec.name.trim().is_empty(), "action name must not be blank");
                    let id = ActionId(next_id);
                    next_id += 1;
                    let action = Action::new(id, spec.name, spec.base_power, spec.base_cooldown);
                    Ok(match restriction {
                        Some(profession) => action.restricted_to(profession),
                        None => action,
                    })
                })
                .collect::<anyhow::Result<Vec<_>>>()
                .map(ActionSet::from)
        };

        let mut loadouts: Vec<(Profession, ActionSet)> = Vec::new();
        for loadout in spec.professions {
            anyhow::ensure!(
                loadouts.iter().all(|(p, _)| *p != loadout.profession),
                "duplicate loadout for profession {}",
                loadout.profession
            );
            let actions = assign(loadout.actions, Some(loadout.profession))?;
            loadouts.push((loadout.profession, actions));
        }

        let mut opponents: Vec<OpponentTemplate> = Vec::new();
        for opponent in spec.opponents {
            anyhow::ensure!(!opponent.name.trim().is_empty(), "opponent name must not be blank");
            anyhow::ensure!(
                opponents.iter().all(|o| o.name != opponent.name),
                "duplicate opponent {}",
                opponent.name
            );
            let actions = assign(opponent.actions, None)?;
            opponents.push(OpponentTemplate {
                name: opponent.name,
                archetype: opponent.archetype,
                specialization: opponent.specialization,
                attributes: opponent.attributes,
                actions,
            });
        }

        tracing::debug!(
            professions = loadouts.len(),
            opponents = opponents.len(),
            actions = next_id,
            "catalog built"
        );

        Ok(Self {
            player_attributes: spec.player_attributes,
            loadouts,
            opponents,
        })
    }

    /// Starting attributes for a new player.
    pub fn player_attributes(&self) -> BaseAttributes {
        self.player_attributes
    }

    /// The shared loadout for `profession`, if the catalog defines one.
    pub fn loadout(&self, profession: Profession) -> Option<&ActionSet> {
        self.loadouts
            .iter()
            .find(|(p, _)| *p == profession)
            .map(|(_, actions)| actions)
    }

    pub fn opponents(&self) -> &[OpponentTemplate] {
        &self.opponents
    }

    pub fn opponent(&self, name: &str) -> Option<&OpponentTemplate> {
        self.opponents.iter().find(|o| o.name == name)
    }

    /// Every action in the catalog, loadouts first.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.loadouts
            .iter()
            .flat_map(|(_, actions)| actions.iter())
            .chain(self.opponents.iter().flat_map(|o| o.actions.iter()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn action(name: &str, power: u32, cooldown: u32) -> ActionSpec {
        ActionSpec {
            name: name.into(),
            base_power: power,
            base_cooldown: cooldown,
        }
    }

    fn spec() -> CatalogSpec {
        CatalogSpec {
            player_attributes: BaseAttributes::new(20, 20, 20),
            professions: vec![LoadoutSpec {
                profession: Profession::Warrior,
                actions: vec![action("Strike", 10, 0), action("Slash", 20, 2)],
            }],
            opponents: vec![OpponentSpec {
                name: "Dummy".into(),
                archetype: Archetype::Standard,
                specialization: Attribute::Power,
                attributes: BaseAttributes::new(10, 10, 10),
                // Same name as a player action on purpose.
                actions: vec![action("Strike", 5, 0)],
            }],
        }
    }

    #[test]
    fn action_ids_are_unique_across_catalog() {
        let catalog = Catalog::build(spec()).unwrap();
        let ids: HashSet<_> = catalog.actions().map(Action::id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn player_actions_are_restricted_to_their_profession() {
        let catalog = Catalog::build(spec()).unwrap();
        let warrior = catalog.loadout(Profession::Warrior).unwrap();
        assert!(warrior.iter().all(|a| a.restriction() == Some(Profession::Warrior)));
        assert!(catalog.loadout(Profession::Mage).is_none());
        assert!(catalog.opponents()[0].actions[0].restriction().is_none());
    }

    #[test]
    fn spawned_opponents_share_the_loadout() {
        let catalog = Catalog::build(spec()).unwrap();
        let template = catalog.opponent("Dummy").unwrap();
        let a = template.spawn();
        let b = template.spawn();
        assert!(Arc::ptr_eq(a.action_set(), b.action_set()));
        assert_eq!(a.attributes().max_hp(), 90);
    }

    #[test]
    fn duplicate_opponents_are_rejected() {
        let mut spec = spec();
        spec.opponents.push(spec.opponents[0].clone());
        let err = Catalog::build(spec).unwrap_err();
        assert!(err.to_string().contains("duplicate opponent"));
    }

    #[test]
    fn blank_action_names_are_rejected() {
        let mut spec = spec();
        spec.professions[0].actions.push(action("  ", 1, 0));
        assert!(Catalog::build(spec).is_err());
    }
}
