//! Machine phases and the state observers receive.
use std::fmt;

use serde::{Deserialize, Serialize};
use slot_core::{ConfettiBurst, Millis, Outcome, ReelSet, SlotConfig, Tally, WinLine};

use crate::simulation::BatchProgress;

/// Lifecycle of one spin.
///
/// During the stop sequence reels overlap (reel 1 starts decelerating before
/// reel 0 settles), so `Decelerating` and `Settling` name the most recent
/// stop-sequence event rather than a single active reel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Spinning,
    Decelerating {
        reel: usize,
        step: usize,
    },
    /// `reel` has just settled; later reels are still decelerating.
    Settling {
        reel: usize,
    },
    /// Every reel has settled; the outcome is pending.
    Evaluating,
    Displaying(Outcome),
}

impl Phase {
    pub fn session(&self) -> SpinSession {
        match self {
            Phase::Idle | Phase::Displaying(_) => SpinSession::default(),
            Phase::Spinning => SpinSession {
                spinning: true,
                stopping: false,
            },
            Phase::Decelerating { .. } | Phase::Settling { .. } | Phase::Evaluating => {
                SpinSession {
                    spinning: true,
                    stopping: true,
                }
            }
        }
    }

    /// True while a spin is in flight, stopping included.
    pub fn is_busy(&self) -> bool {
        self.session().spinning
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Displaying(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Spinning => write!(f, "spinning"),
            Phase::Decelerating { reel, step } => {
                write!(f, "decelerating reel {reel} (step {step})")
            }
            Phase::Settling { reel } => write!(f, "settling after reel {reel}"),
            Phase::Evaluating => write!(f, "evaluating"),
            Phase::Displaying(_) => write!(f, "displaying"),
        }
    }
}

/// `{spinning, stopping}` view of the phase. `stopping` implies `spinning`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinSession {
    pub spinning: bool,
    pub stopping: bool,
}

/// User-facing controls, used for enablement and error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Spin,
    Stop,
    SimulateSpins,
    SimulateMath,
    CancelSimulation,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Control::Spin => "spin",
            Control::Stop => "stop",
            Control::SimulateSpins => "simulate spins",
            Control::SimulateMath => "math simulation",
            Control::CancelSimulation => "cancel simulation",
        };
        write!(f, "{}", label)
    }
}

/// What the primary button currently does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryControl {
    Spin,
    Stop,
    /// Shown while stopping; the button is disabled.
    Stopping,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub primary: PrimaryControl,
    pub simulate_enabled: bool,
    pub cancel_enabled: bool,
}

impl Controls {
    pub fn primary_enabled(&self) -> bool {
        self.primary != PrimaryControl::Stopping
    }
}

/// Full copy of the machine's observable state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineState {
    /// Virtual clock at the time the copy was taken.
    pub now: Millis,
    pub phase: Phase,
    pub reels: ReelSet,
    pub settled: [bool; SlotConfig::REEL_COUNT],
    pub tally: Tally,
    pub confetti: ConfettiBurst,
    pub batch: Option<BatchProgress>,
}

impl MachineState {
    pub fn session(&self) -> SpinSession {
        self.phase.session()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Line to draw over the reels, present only while a win is displayed.
    pub fn highlight(&self) -> Option<WinLine> {
        self.outcome().and_then(|outcome| outcome.win_line())
    }

    pub fn is_simulating(&self) -> bool {
        self.batch.is_some()
    }

    pub fn controls(&self) -> Controls {
        let session = self.session();
        let primary = match (session.spinning, session.stopping) {
            (_, true) => PrimaryControl::Stopping,
            (true, false) => PrimaryControl::Stop,
            (false, false) => PrimaryControl::Spin,
        };
        Controls {
            primary,
            simulate_enabled: !session.spinning && !self.is_simulating(),
            cancel_enabled: self.is_simulating(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_follows_phase() {
        assert_eq!(Phase::Idle.session(), SpinSession::default());
        assert!(Phase::Spinning.session().spinning);
        assert!(!Phase::Spinning.session().stopping);
        let stopping = Phase::Decelerating { reel: 1, step: 2 }.session();
        assert!(stopping.spinning && stopping.stopping);
        assert!(Phase::Evaluating.is_busy());
        assert!(!Phase::Displaying(Outcome::LOSS).is_busy());
    }

    #[test]
    fn controls_follow_session_and_batch() {
        let mut state = MachineState {
            now: Millis::ZERO,
            phase: Phase::Idle,
            reels: ReelSet::zeroed(),
            settled: [false; SlotConfig::REEL_COUNT],
            tally: Tally::new(),
            confetti: ConfettiBurst::new(),
            batch: None,
        };
        let controls = state.controls();
        assert_eq!(controls.primary, PrimaryControl::Spin);
        assert!(controls.simulate_enabled);
        assert!(!controls.cancel_enabled);

        state.phase = Phase::Spinning;
        assert_eq!(state.controls().primary, PrimaryControl::Stop);
        assert!(!state.controls().simulate_enabled);

        state.phase = Phase::Settling { reel: 0 };
        assert_eq!(state.controls().primary, PrimaryControl::Stopping);
        assert!(!state.controls().primary_enabled());

        state.phase = Phase::Idle;
        state.batch = Some(BatchProgress {
            started: 1,
            total: 20,
        });
        assert!(!state.controls().simulate_enabled);
        assert!(state.controls().cancel_enabled);
    }
}
