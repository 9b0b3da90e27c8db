use crate::outcome::Outcome;

/// Cumulative win/loss counters owned by one machine instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    pub wins: u64,
    pub losses: u64,
}

impl Tally {
    pub const fn new() -> Self {
        Self { wins: 0, losses: 0 }
    }

    /// Counts one evaluated spin.
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.found() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Folds externally computed counts (e.g. a math simulation) into the tally.
    pub fn merge(&mut self, wins: u64, losses: u64) {
        self.wins += wins;
        self.losses += losses;
    }

    pub const fn total(&self) -> u64 {
        self.wins + self.losses
    }

    /// Win rate in percent; zero before any spin is recorded.
    pub fn win_rate_percent(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.wins as f64 / total as f64 * 100.0,
        }
    }
}
