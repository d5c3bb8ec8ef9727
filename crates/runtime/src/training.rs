//! Attribute training for players and opponents.
//!
//! Players pick the attribute to train. Opponents train by weighted roll:
//! their specialization gets 60% of the weight and the other two attributes
//! 20% each.

use arena_core::{Attribute, BaseAttributes, Combatant, RollSource};
use strum::IntoEnumIterator;

use crate::error::{Result, SessionError};

/// Roll weight (out of 100) of an opponent's specialization.
pub const SPECIALIZATION_WEIGHT: u32 = 60;
/// Roll weight (out of 100) of each non-specialized attribute.
pub const OFF_SPEC_WEIGHT: u32 = 20;

/// Fewest and most training cycles granted between encounters.
pub const MIN_TRAINING_CYCLES: u32 = 3;
pub const MAX_TRAINING_CYCLES: u32 = 7;

/// Parse an attribute name such as `STR`, `agility` or `Intelligence`.
pub fn parse_attribute(name: &str) -> Result<Attribute> {
    name.trim()
        .parse()
        .map_err(|_| SessionError::UnknownAttribute(name.to_owned()))
}

/// Permanently raise `attribute` by `amount`.
pub fn train(combatant: &mut Combatant, attribute: Attribute, amount: u32) -> Result<()> {
    if amount == 0 {
        return Err(SessionError::InvalidAmount);
    }
    combatant.attributes_mut().increase(attribute, amount);
    tracing::debug!(combatant = combatant.name(), %attribute, amount, "trained");
    Ok(())
}

/// Which attribute a d100 `roll` trains for an opponent specialized in
/// `specialization`. Weights are laid out in power, agility, focus order.
pub fn weighted_attribute(specialization: Attribute, roll: u32) -> Attribute {
    let mut threshold = 0;
    for attribute in Attribute::iter() {
        threshold += if attribute == specialization {
            SPECIALIZATION_WEIGHT
        } else {
            OFF_SPEC_WEIGHT
        };
        if roll <= threshold {
            return attribute;
        }
    }
    Attribute::Focus
}

/// Train an opponent by weighted roll and return the trained attribute.
pub fn train_weighted(
    combatant: &mut Combatant,
    specialization: Attribute,
    amount: u32,
    rolls: &mut impl RollSource,
) -> Result<Attribute> {
    if amount == 0 {
        return Err(SessionError::InvalidAmount);
    }
    let attribute = weighted_attribute(specialization, rolls.roll_d100());
    train(combatant, attribute, amount)?;
    Ok(attribute)
}

/// The strictly greatest attribute; any tie resolves to power.
pub fn dominant_attribute(attributes: &BaseAttributes) -> Attribute {
    let BaseAttributes {
        power,
        agility,
        focus,
    } = *attributes;
    if agility > power && agility > focus {
        Attribute::Agility
    } else if focus > power && focus > agility {
        Attribute::Focus
    } else {
        Attribute::Power
    }
}

/// Number of training cycles to grant, uniform in
/// [`MIN_TRAINING_CYCLES`]..=[`MAX_TRAINING_CYCLES`].
pub fn random_training_cycles(rolls: &mut impl RollSource) -> u32 {
    rolls.roll_range(MIN_TRAINING_CYCLES, MAX_TRAINING_CYCLES)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arena_core::{Archetype, AttributeSet, ScriptedRolls};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn dummy() -> Combatant {
        Combatant::opponent("Dummy", Archetype::Standard, AttributeSet::default(), Arc::from(Vec::new()))
    }

    #[test]
    fn attribute_names_parse_with_aliases() {
        assert_eq!(parse_attribute("STR"), Ok(Attribute::Power));
        assert_eq!(parse_attribute("strength"), Ok(Attribute::Power));
        assert_eq!(parse_attribute("Agi"), Ok(Attribute::Agility));
        assert_eq!(parse_attribute("INTELLIGENCE"), Ok(Attribute::Focus));
        assert_eq!(parse_attribute(" focus "), Ok(Attribute::Focus));
        assert!(matches!(parse_attribute("luck"), Err(SessionError::UnknownAttribute(_))));
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut dummy = dummy();
        assert_eq!(train(&mut dummy, Attribute::Power, 0), Err(SessionError::InvalidAmount));
        assert_eq!(dummy.attributes().power(), 20);
    }

    #[test]
    fn weighted_rolls_follow_sixty_twenty_twenty() {
        // Agility specialist: 1-20 power, 21-80 agility, 81-100 focus.
        assert_eq!(weighted_attribute(Attribute::Agility, 20), Attribute::Power);
        assert_eq!(weighted_attribute(Attribute::Agility, 21), Attribute::Agility);
        assert_eq!(weighted_attribute(Attribute::Agility, 80), Attribute::Agility);
        assert_eq!(weighted_attribute(Attribute::Agility, 81), Attribute::Focus);

        // Power specialist: 1-60 power.
        assert_eq!(weighted_attribute(Attribute::Power, 60), Attribute::Power);
        assert_eq!(weighted_attribute(Attribute::Power, 61), Attribute::Agility);

        // Focus specialist: 41-100 focus.
        assert_eq!(weighted_attribute(Attribute::Focus, 40), Attribute::Agility);
        assert_eq!(weighted_attribute(Attribute::Focus, 41), Attribute::Focus);
    }

    #[test]
    fn train_weighted_applies_rolled_attribute() {
        let mut dummy = dummy();
        let trained = train_weighted(&mut dummy, Attribute::Focus, 5, &mut ScriptedRolls::always(90)).unwrap();
        assert_eq!(trained, Attribute::Focus);
        assert_eq!(dummy.attributes().focus(), 25);
    }

    #[test]
    fn dominant_attribute_breaks_ties_to_power() {
        assert_eq!(dominant_attribute(&BaseAttributes::new(15, 30, 15)), Attribute::Agility);
        assert_eq!(dominant_attribute(&BaseAttributes::new(15, 15, 30)), Attribute::Focus);
        assert_eq!(dominant_attribute(&BaseAttributes::new(10, 30, 30)), Attribute::Power);
        assert_eq!(dominant_attribute(&BaseAttributes::new(20, 20, 20)), Attribute::Power);
    }

    #[test]
    fn training_cycles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let cycles = random_training_cycles(&mut rng);
            assert!((MIN_TRAINING_CYCLES..=MAX_TRAINING_CYCLES).contains(&cycles));
        }
    }
}
