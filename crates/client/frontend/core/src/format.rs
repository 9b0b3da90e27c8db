//! Human-readable messages for runtime events.
use runtime::{Event, MachineEvent, OutcomeEvent, SimulationEvent, SimulationReport};

use crate::message::{MessageEntry, MessageLevel};

/// Message for an event, or `None` for events that only drive redraws.
pub fn describe_event(event: &Event) -> Option<MessageEntry> {
    match event {
        Event::Machine(MachineEvent::StopRequested { at, auto }) => {
            let text = if *auto { "Auto-stop" } else { "Stopping reels" };
            Some(MessageEntry::new(text, Some(at.0), MessageLevel::Info))
        }
        Event::Machine(_) => None,
        Event::Outcome(OutcomeEvent::Evaluated {
            outcome,
            snapshot,
            at,
            ..
        }) => {
            let (prefix, level) = if outcome.found() {
                ("WIN", MessageLevel::Win)
            } else {
                ("LOSS", MessageLevel::Info)
            };
            Some(MessageEntry::new(
                format!("{prefix}: {outcome} [{snapshot}]"),
                Some(at.0),
                level,
            ))
        }
        Event::Simulation(SimulationEvent::BatchStarted { total }) => Some(MessageEntry::new(
            format!("Simulating {total} spins..."),
            None,
            MessageLevel::Info,
        )),
        Event::Simulation(SimulationEvent::BatchSpinStarted { .. }) => None,
        Event::Simulation(SimulationEvent::BatchFinished {
            progress,
            cancelled,
        }) => {
            let text = if *cancelled {
                format!(
                    "Simulation cancelled after {}/{} spins",
                    progress.started, progress.total
                )
            } else {
                format!("Simulation of {} spins finished", progress.total)
            };
            let level = if *cancelled {
                MessageLevel::Warning
            } else {
                MessageLevel::Info
            };
            Some(MessageEntry::new(text, None, level))
        }
        Event::Simulation(SimulationEvent::MathCompleted { report }) => Some(MessageEntry::new(
            math_summary(report),
            None,
            MessageLevel::Info,
        )),
    }
}

/// e.g. `Math simulation (20 spins) finished. Wins: 1, Losses: 19, Win rate: 5.00%`
pub fn math_summary(report: &SimulationReport) -> String {
    format!(
        "Math simulation ({} spins) finished. Wins: {}, Losses: {}, Win rate: {:.2}%",
        report.count,
        report.wins,
        report.losses,
        report.win_rate_percent()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime::BatchProgress;
    use slot_core::{Millis, Snapshot, Tally, evaluate};

    #[test]
    fn win_and_loss_messages() {
        let snapshot = Snapshot::from_reels([[5, 1, 8], [2, 5, 9], [6, 3, 5]]).unwrap();
        let event = Event::Outcome(OutcomeEvent::Evaluated {
            outcome: evaluate(&snapshot),
            snapshot,
            tally: Tally::new(),
            at: Millis(2500),
        });
        let entry = describe_event(&event).unwrap();
        assert_eq!(entry.level, MessageLevel::Win);
        assert!(entry.text.starts_with("WIN: Diagonal ↘ match of symbol 5"));
        assert_eq!(entry.timestamp, Some(2500));

        let snapshot = Snapshot::from_reels([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        let event = Event::Outcome(OutcomeEvent::Evaluated {
            outcome: evaluate(&snapshot),
            snapshot,
            tally: Tally::new(),
            at: Millis(10),
        });
        assert!(
            describe_event(&event)
                .unwrap()
                .text
                .starts_with("LOSS: No winning line found")
        );
    }

    #[test]
    fn math_summary_uses_two_decimals() {
        let report = SimulationReport {
            count: 20,
            wins: 1,
            losses: 19,
            samples: Vec::new(),
        };
        assert_eq!(
            math_summary(&report),
            "Math simulation (20 spins) finished. Wins: 1, Losses: 19, Win rate: 5.00%"
        );
    }

    #[test]
    fn cancelled_batch_is_a_warning() {
        let event = Event::Simulation(SimulationEvent::BatchFinished {
            progress: BatchProgress {
                started: 3,
                total: 20,
            },
            cancelled: true,
        });
        let entry = describe_event(&event).unwrap();
        assert_eq!(entry.level, MessageLevel::Warning);
        assert_eq!(entry.text, "Simulation cancelled after 3/20 spins");
    }

    #[test]
    fn state_copies_are_silent() {
        let event = Event::Machine(MachineEvent::SpinStarted { at: Millis(0) });
        assert!(describe_event(&event).is_none());
    }
}
