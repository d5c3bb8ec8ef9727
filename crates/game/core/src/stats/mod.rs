//! Attribute model.
//!
//! # Architecture
//!
//! ```text
//! [ Base Attributes (power, agility, focus) ]   ← stored
//!      + effect modifiers                        ← temporary
//!      ↓
//! [ Derived Stats (max HP, evasion, accuracy, CDR, speed) ]   ← recomputed
//! ```
//!
//! Current HP is the only other stored value. It is never set directly except
//! through damage, healing and the max-HP adjustment rule in
//! [`AttributeSet::increase`].

pub mod attributes;
pub mod derived;

pub use attributes::{Attribute, AttributeSet, AttributeSnapshot, BaseAttributes};
pub use derived::{DerivedStats, derive_stats};
