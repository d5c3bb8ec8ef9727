//! Deterministic combat rules for one-on-one, turn-based encounters.
//!
//! `arena-core` defines the attribute model, temporary effects, actions,
//! combatant bookkeeping, opponent decision policies and the combat engine.
//! It performs no I/O; randomness is supplied by the caller through
//! [`rng::RollSource`], and all encounter mutation flows through
//! [`engine::CombatEngine`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod item;
pub mod policy;
pub mod rng;
pub mod state;
pub mod stats;

pub use action::{Action, ActionId, ActionSet, Rejection};
pub use combat::{ActionReport, AttackOutcome, Intent};
pub use config::CombatConfig;
pub use engine::{ActionMeter, CombatEngine, TurnClock};
pub use error::{ErrorSeverity, GameError};
pub use item::{Consumable, ConsumableKind, ConsumableOutcome};
pub use policy::choose_action;
pub use rng::{RollSource, ScriptedRolls};
pub use state::{
    ActiveEffects, Archetype, Combatant, Cooldowns, EffectEvent, EffectKind, Profession, Role,
    TemporaryEffect,
};
pub use stats::{Attribute, AttributeSet, AttributeSnapshot, BaseAttributes, DerivedStats};
