//! Action-point scheduling.
//!
//! Every iteration each combatant accrues action points equal to its speed.
//! Whenever a meter holds at least the threshold, the combatant acts once and
//! the threshold is subtracted; the remainder carries over.

/// Accrued action points for one combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionMeter {
    points: u32,
}

impl ActionMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn accrue(&mut self, speed: u32) {
        self.points = self.points.saturating_add(speed);
    }

    /// Spend `threshold` points if available. Returns whether the combatant acts.
    pub fn try_spend(&mut self, threshold: u32) -> bool {
        if self.points >= threshold {
            self.points -= threshold;
            true
        } else {
            false
        }
    }
}

/// Paired meters for the two sides of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnClock {
    threshold: u32,
    iteration: u32,
    player: ActionMeter,
    opponent: ActionMeter,
}

/// Which sides act in one iteration. The player always resolves first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadySides {
    pub player: bool,
    pub opponent: bool,
}

impl TurnClock {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            iteration: 0,
            player: ActionMeter::new(),
            opponent: ActionMeter::new(),
        }
    }

    /// Completed iterations.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Advance one iteration and report who may act.
    pub fn advance(&mut self, player_speed: u32, opponent_speed: u32) -> ReadySides {
        self.iteration += 1;
        self.player.accrue(player_speed);
        self.opponent.accrue(opponent_speed);
        ReadySides {
            player: self.player.try_spend(self.threshold),
            opponent: self.opponent.try_spend(self.threshold),
        }
    }
}
