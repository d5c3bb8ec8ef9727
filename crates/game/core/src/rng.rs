//! Random roll sources for hit checks, training and roster shuffles.
//!
//! The engine never owns a generator. Every operation that needs a roll takes
//! a `&mut impl RollSource`, so callers decide between an entropy-seeded
//! generator, a fixed seed for reproducible runs, or a scripted sequence.
//!
//! Any [`rand::RngCore`] is a roll source:
//!
//! ```rust,ignore
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let roll = rng.roll_d100();
//! ```

use std::collections::VecDeque;

use rand::Rng;

/// Source of uniformly distributed integer rolls.
pub trait RollSource {
    /// Roll a value in `[min, max]` inclusive.
    ///
    /// Returns `min` when the range is empty or degenerate.
    fn roll_range(&mut self, min: u32, max: u32) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&mut self) -> u32 {
        self.roll_range(1, 100)
    }
}

impl<R: rand::RngCore> RollSource for R {
    fn roll_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }
}

/// Replays a fixed list of rolls, then repeats the last one.
///
/// Values outside the requested range are clamped into it. An empty script
/// always yields the range minimum.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    queue: VecDeque<u32>,
    last: Option<u32>,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: rolls.into_iter().collect(),
            last: None,
        }
    }

    /// A source whose every roll is `value`.
    pub fn always(value: u32) -> Self {
        Self {
            queue: VecDeque::new(),
            last: Some(value),
        }
    }

    /// Rolls still queued before the script starts repeating.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll_range(&mut self, min: u32, max: u32) -> u32 {
        if let Some(next) = self.queue.pop_front() {
            self.last = Some(next);
        }
        match self.last {
            Some(value) if min < max => value.clamp(min, max),
            _ => min,
        }
    }
}
