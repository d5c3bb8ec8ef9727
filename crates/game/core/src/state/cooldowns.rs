//! Per-action cooldown bookkeeping.
//!
//! Ready actions are represented by absence: an entry exists only while its
//! cooldown is positive. Storing `NonZeroU32` makes a zero or negative entry
//! unrepresentable.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use crate::action::ActionId;

/// Remaining cooldown turns keyed by action identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cooldowns {
    remaining: BTreeMap<ActionId, NonZeroU32>,
}

impl Cooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining turns for `action`; 0 means ready.
    pub fn get(&self, action: ActionId) -> u32 {
        self.remaining.get(&action).map_or(0, |turns| turns.get())
    }

    /// Set the remaining turns for `action`. Zero removes the entry.
    pub fn set(&mut self, action: ActionId, turns: u32) {
        match NonZeroU32::new(turns) {
            Some(turns) => {
                self.remaining.insert(action, turns);
            }
            None => {
                self.remaining.remove(&action);
            }
        }
    }

    pub fn is_ready(&self, action: ActionId) -> bool {
        !self.remaining.contains_key(&action)
    }

    /// Count every cooldown down by one turn, dropping the ones that reach zero.
    pub fn tick_all(&mut self) {
        self.remaining = std::mem::take(&mut self.remaining)
            .into_iter()
            .filter_map(|(action, turns)| NonZeroU32::new(turns.get() - 1).map(|t| (action, t)))
            .collect();
    }

    pub fn reset(&mut self) {
        self.remaining.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, u32)> + '_ {
        self.remaining.iter().map(|(action, turns)| (*action, turns.get()))
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
