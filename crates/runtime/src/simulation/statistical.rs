//! Monte-Carlo evaluation of random grids.
use rand::Rng;
use serde::{Deserialize, Serialize};
use slot_core::{Outcome, Snapshot, evaluate};

/// Number of `(snapshot, outcome)` pairs kept for inspection.
pub const SAMPLE_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSample {
    pub snapshot: Snapshot,
    pub outcome: Outcome,
}

/// Aggregate result of a statistical run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub count: u64,
    pub wins: u64,
    pub losses: u64,
    pub samples: Vec<SimulationSample>,
}

impl SimulationReport {
    pub fn win_rate_percent(&self) -> f64 {
        match self.count {
            0 => 0.0,
            count => self.wins as f64 / count as f64 * 100.0,
        }
    }
}

/// Evaluates `count` independent uniformly random grids.
pub fn run<R: Rng + ?Sized>(rng: &mut R, count: u64) -> SimulationReport {
    let mut report = SimulationReport {
        count,
        ..SimulationReport::default()
    };

    for _ in 0..count {
        let snapshot = Snapshot::random(rng);
        let outcome = evaluate(&snapshot);
        if outcome.found() {
            report.wins += 1;
        } else {
            report.losses += 1;
        }
        if report.samples.len() < SAMPLE_LIMIT {
            report.samples.push(SimulationSample { snapshot, outcome });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn counts_add_up_and_samples_are_capped() {
        let mut rng = StdRng::seed_from_u64(1);
        let report = run(&mut rng, 20);
        assert_eq!(report.wins + report.losses, 20);
        assert_eq!(report.samples.len(), SAMPLE_LIMIT);
        for sample in &report.samples {
            assert_eq!(evaluate(&sample.snapshot), sample.outcome);
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let report = run(&mut StdRng::seed_from_u64(1), 0);
        assert_eq!(report, SimulationReport::default());
        assert_eq!(report.win_rate_percent(), 0.0);
    }
}
