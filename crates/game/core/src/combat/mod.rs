//! Combat resolution primitives.
//!
//! Pure functions shared by the engine and by opponent policies. Nothing here
//! touches a [`crate::state::Combatant`] directly.
//!
//! # Core Functions
//!
//! - `hit_chance`: accuracy vs evasion, clamped to the configured window
//! - `check_hit` / `attempt_hit`: compare or draw a d100 roll against the chance
//! - `action_damage`: flat additive damage (base power + power)

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{action_damage, basic_attack_damage};
pub use hit::{attempt_hit, check_hit, hit_chance};
pub use result::{ActionReport, AttackOutcome, Intent};
