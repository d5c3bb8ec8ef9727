//! Cross-session win/loss record and best victorious run.

use std::fmt;

use arena_core::{BaseAttributes, Profession};
use serde::{Deserialize, Serialize};

/// Persistent statistics over every completed game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStats {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Profession of the best victorious run, if any game was won.
    pub best_profession: Option<Profession>,
    pub best_power: u32,
    pub best_agility: u32,
    pub best_focus: u32,
}

impl SessionStats {
    /// Record a completed game.
    ///
    /// The best run is replaced only by a win whose attribute total strictly
    /// exceeds the stored best.
    pub fn record_game(&mut self, won: bool, profession: Profession, attributes: BaseAttributes) {
        self.games_played += 1;
        if !won {
            self.losses += 1;
            return;
        }

        self.wins += 1;
        if attributes.total() > self.best_attributes().total() {
            self.best_profession = Some(profession);
            self.best_power = attributes.power;
            self.best_agility = attributes.agility;
            self.best_focus = attributes.focus;
        }
    }

    /// Forget every recorded game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn best_attributes(&self) -> BaseAttributes {
        BaseAttributes::new(self.best_power, self.best_agility, self.best_focus)
    }

    pub fn has_won_before(&self) -> bool {
        self.wins > 0
    }

    /// Win rate in percent; 0 when no games have been played.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.wins) * 100.0 / f64::from(self.games_played)
    }

    pub fn motivational_message(&self) -> &'static str {
        if self.games_played == 0 {
            return "Welcome, hero! Your legend begins now.";
        }
        if self.wins == 0 {
            return "Keep trying! Every defeat teaches valuable lessons.";
        }

        match self.win_rate() {
            rate if rate >= 75.0 => "Legendary! You're mastering this challenge!",
            rate if rate >= 50.0 => "Strong warrior! Victory is within your grasp!",
            rate if rate >= 25.0 => "Progress! You're learning the way of battle.",
            _ => "Don't give up! Every hero faces trials.",
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{rule}")?;
        writeln!(f, "YOUR LEGEND")?;
        writeln!(f, "{rule}")?;

        if self.games_played == 0 {
            return writeln!(f, "No games played yet. Your journey begins now!");
        }

        writeln!(f, "Games Played: {}", self.games_played)?;
        writeln!(f, "Victories: {}", self.wins)?;
        writeln!(f, "Defeats: {}", self.losses)?;
        writeln!(f, "Win Rate: {:.1}%", self.win_rate())?;

        if let Some(profession) = self.best_profession {
            writeln!(f)?;
            writeln!(f, "Best Victorious Run:")?;
            writeln!(f, "  Profession: {profession}")?;
            writeln!(
                f,
                "  Final Stats: STR={}, AGI={}, INT={}",
                self.best_power, self.best_agility, self.best_focus
            )?;
        }
        write!(f, "{rule}")
    }
}
