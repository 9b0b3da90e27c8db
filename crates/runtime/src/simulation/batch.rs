//! Bookkeeping for an animated batch of spins.
use serde::{Deserialize, Serialize};

/// Progress visible to observers while a batch runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProgress {
    pub started: u32,
    pub total: u32,
}

/// Active animated batch. Present on the machine only while a batch runs,
/// which is what makes a second `simulate_spins` call a no-op.
#[derive(Debug)]
pub struct BatchRun {
    total: u32,
    started: u32,
}

impl BatchRun {
    pub fn new(total: u32) -> Self {
        Self { total, started: 0 }
    }

    /// Records one more spin; returns its 1-based index.
    pub fn record_start(&mut self) -> u32 {
        self.started += 1;
        self.started
    }

    pub fn is_complete(&self) -> bool {
        self.started >= self.total
    }

    pub fn progress(&self) -> BatchProgress {
        BatchProgress {
            started: self.started,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_to_total() {
        let mut run = BatchRun::new(2);
        assert!(!run.is_complete());
        assert_eq!(run.record_start(), 1);
        assert_eq!(run.record_start(), 2);
        assert!(run.is_complete());
        assert_eq!(
            run.progress(),
            BatchProgress {
                started: 2,
                total: 2
            }
        );
    }
}
