//! View-model snapshots derived from [`runtime::MachineState`].
use runtime::{MachineState, Phase, PrimaryControl};
use slot_core::{ConfettiParticle, Millis, SlotConfig, Symbol, WinLine};

use crate::config::SimulationConfig;

pub const TITLE: &str = "SLOT MACHINE";

/// Terminals narrower than this get compact labels.
pub const COMPACT_WIDTH: u16 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Compact,
}

impl LayoutMode {
    pub fn for_width(width: u16) -> Self {
        if width < COMPACT_WIDTH {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub enabled: bool,
}

impl ButtonView {
    fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            label: label.into(),
            enabled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReelView {
    pub index: usize,
    /// Visible window, top row first.
    pub symbols: [Symbol; SlotConfig::VISIBLE_PER_REEL],
    pub settled: bool,
    /// Rows of this reel that lie on the winning line.
    pub highlighted: [bool; SlotConfig::VISIBLE_PER_REEL],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinBanner {
    pub line: WinLine,
    pub headline: &'static str,
    pub reason: String,
}

impl WinBanner {
    pub const TITLE: &'static str = "🎉 WINNER! 🎉";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TallyView {
    pub wins: u64,
    pub losses: u64,
    /// Two decimals, `0.00%` before the first spin.
    pub win_rate: String,
}

/// Everything a renderer needs for one frame, except the message log.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotView {
    pub now: Millis,
    pub phase: Phase,
    pub reels: [ReelView; SlotConfig::REEL_COUNT],
    pub win: Option<WinBanner>,
    pub status: String,
    pub primary: ButtonView,
    pub simulate: ButtonView,
    pub math: ButtonView,
    pub cancel: ButtonView,
    pub tally: TallyView,
    pub batch: Option<String>,
    pub hint: &'static str,
    pub confetti: Vec<ConfettiParticle>,
}

impl SlotView {
    pub fn from_state(
        state: &MachineState,
        simulation: &SimulationConfig,
        layout: LayoutMode,
    ) -> Self {
        let highlight = state.highlight();
        let reels = std::array::from_fn(|index| {
            let reel = state.reels.reel(index);
            ReelView {
                index,
                symbols: *reel.window(),
                settled: state.settled[index],
                highlighted: std::array::from_fn(|row| {
                    highlight.is_some_and(|line| line.contains(index, row))
                }),
            }
        });

        let win = state.outcome().and_then(|outcome| {
            outcome.win_line().map(|line| WinBanner {
                line,
                headline: line.headline(),
                reason: outcome.reason(),
            })
        });

        let controls = state.controls();

        Self {
            now: state.now,
            phase: state.phase,
            reels,
            win,
            status: status_text(state),
            primary: ButtonView::new(
                primary_label(controls.primary, layout),
                controls.primary_enabled(),
            ),
            simulate: ButtonView::new(
                format!("Simulate {} Spins", simulation.batch_spins),
                controls.simulate_enabled,
            ),
            math: ButtonView::new(
                format!("Math Sim {}", simulation.math_spins),
                controls.simulate_enabled,
            ),
            cancel: ButtonView::new("Cancel Sim", controls.cancel_enabled),
            tally: TallyView {
                wins: state.tally.wins,
                losses: state.tally.losses,
                win_rate: format!("{:.2}%", state.tally.win_rate_percent()),
            },
            batch: state
                .batch
                .map(|progress| format!("Simulating {}/{}", progress.started, progress.total)),
            hint: match layout {
                LayoutMode::Wide => "Press SPACE to spin • Press SPACE again to stop",
                LayoutMode::Compact => "SPACE spin • SPACE stop",
            },
            confetti: state.confetti.to_vec(),
        }
    }

    pub fn is_win(&self) -> bool {
        self.win.is_some()
    }
}

pub fn primary_label(primary: PrimaryControl, layout: LayoutMode) -> &'static str {
    match (primary, layout) {
        (PrimaryControl::Stopping, _) => "STOPPING...",
        (PrimaryControl::Spin, LayoutMode::Wide) => "SPIN (SPACE)",
        (PrimaryControl::Spin, LayoutMode::Compact) => "SPIN",
        (PrimaryControl::Stop, LayoutMode::Wide) => "STOP (SPACE)",
        (PrimaryControl::Stop, LayoutMode::Compact) => "STOP",
    }
}

fn status_text(state: &MachineState) -> String {
    match state.phase {
        Phase::Idle => "Ready".to_string(),
        Phase::Spinning => "Spinning".to_string(),
        Phase::Decelerating { .. } | Phase::Settling { .. } | Phase::Evaluating => {
            "Stopping".to_string()
        }
        Phase::Displaying(outcome) => outcome.reason(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime::BatchProgress;
    use slot_core::{ConfettiBurst, Outcome, ReelSet, Snapshot, Tally, evaluate};

    fn state(phase: Phase) -> MachineState {
        MachineState {
            now: Millis::ZERO,
            phase,
            reels: ReelSet::zeroed(),
            settled: [false; 3],
            tally: Tally::new(),
            confetti: ConfettiBurst::new(),
            batch: None,
        }
    }

    #[test]
    fn primary_labels_follow_phase_and_width() {
        let config = SimulationConfig::default();

        let view = SlotView::from_state(&state(Phase::Idle), &config, LayoutMode::Wide);
        assert_eq!(view.primary, ButtonView::new("SPIN (SPACE)", true));

        let view = SlotView::from_state(&state(Phase::Spinning), &config, LayoutMode::Compact);
        assert_eq!(view.primary, ButtonView::new("STOP", true));

        let view = SlotView::from_state(&state(Phase::Evaluating), &config, LayoutMode::Wide);
        assert_eq!(view.primary, ButtonView::new("STOPPING...", false));
        assert!(!view.simulate.enabled);
        assert!(!view.math.enabled);
    }

    #[test]
    fn layout_switches_below_sixty_columns() {
        assert_eq!(LayoutMode::for_width(59), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(60), LayoutMode::Wide);
    }

    #[test]
    fn win_highlights_line_cells() {
        let snapshot = Snapshot::from_reels([[1, 2, 7], [4, 7, 9], [7, 8, 3]]).unwrap();
        let outcome = evaluate(&snapshot);
        let mut machine = state(Phase::Displaying(outcome));
        machine.reels = ReelSet::from(snapshot);
        machine.tally.record(&outcome);

        let view = SlotView::from_state(&machine, &SimulationConfig::default(), LayoutMode::Wide);
        let banner = view.win.as_ref().unwrap();
        assert_eq!(banner.headline, "Diagonal (↗) matches!");
        assert_eq!(view.reels[0].highlighted, [false, false, true]);
        assert_eq!(view.reels[1].highlighted, [false, true, false]);
        assert_eq!(view.reels[2].highlighted, [true, false, false]);
        assert_eq!(view.tally.win_rate, "100.00%");
    }

    #[test]
    fn loss_shows_reason_without_banner() {
        let view = SlotView::from_state(
            &state(Phase::Displaying(Outcome::LOSS)),
            &SimulationConfig::default(),
            LayoutMode::Wide,
        );
        assert!(!view.is_win());
        assert_eq!(view.status, "No winning line found");
        assert_eq!(view.tally.win_rate, "0.00%");
    }

    #[test]
    fn batch_progress_disables_simulation_buttons() {
        let mut machine = state(Phase::Idle);
        machine.batch = Some(BatchProgress {
            started: 3,
            total: 20,
        });
        let view = SlotView::from_state(&machine, &SimulationConfig::default(), LayoutMode::Wide);
        assert_eq!(view.batch.as_deref(), Some("Simulating 3/20"));
        assert_eq!(view.simulate, ButtonView::new("Simulate 20 Spins", false));
        assert_eq!(view.math, ButtonView::new("Math Sim 20", false));
        assert!(view.cancel.enabled);
    }
}
