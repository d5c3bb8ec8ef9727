//! Per-combatant encounter state.
//!
//! A [`Combatant`] owns its attributes, cooldowns and active effects and shares
//! its action loadout with every other combatant built from the same template.
//! The engine mutates combatants only through the methods defined here.
pub mod combatant;
pub mod cooldowns;
pub mod effects;
pub mod role;

pub use combatant::Combatant;
pub use cooldowns::Cooldowns;
pub use effects::{ActiveEffects, EffectEvent, EffectKind, TemporaryEffect};
pub use role::{Archetype, Profession, Role};
