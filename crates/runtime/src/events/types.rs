//! Event types for different topics.

use serde::{Deserialize, Serialize};
use slot_core::{Millis, Outcome, Snapshot, Symbol, Tally};

use crate::machine::MachineState;
use crate::simulation::{BatchProgress, SimulationReport};

/// Reel and phase updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MachineEvent {
    SpinStarted {
        at: Millis,
    },

    /// The stop sequence was scheduled, by the user or the auto-stop timer.
    StopRequested {
        at: Millis,
        auto: bool,
    },

    ReelSettled {
        reel: usize,
        window: [Symbol; 3],
        at: Millis,
    },

    /// Full state copy, published after every batch of changes.
    StateChanged {
        state: Box<MachineState>,
    },
}

/// Results of evaluating a settled grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutcomeEvent {
    Evaluated {
        outcome: Outcome,
        snapshot: Snapshot,
        /// Tally after the outcome was applied.
        tally: Tally,
        at: Millis,
    },
}

/// Animated batch and statistical simulation progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SimulationEvent {
    BatchStarted {
        total: u32,
    },

    BatchSpinStarted {
        progress: BatchProgress,
    },

    BatchFinished {
        progress: BatchProgress,
        cancelled: bool,
    },

    MathCompleted {
        report: SimulationReport,
    },
}
