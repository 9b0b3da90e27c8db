use thiserror::Error;

use super::phase::{Control, Phase};

/// Control misuse. Refused commands never change machine state.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("{control} is disabled while the machine is {phase}")]
    ControlDisabled { control: Control, phase: Phase },

    #[error("{control} is disabled while a batch simulation is running")]
    SimulationRunning { control: Control },
}
