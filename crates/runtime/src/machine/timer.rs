use slot_core::Snapshot;

/// Events the machine schedules on its own clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimerEvent {
    /// Repeating spin tick for one reel.
    SpinTick { reel: usize },
    AutoStop,
    Decelerate { reel: usize, step: usize },
    Settle { reel: usize },
    /// Carries the grid produced by the last settle.
    Evaluate { snapshot: Snapshot },
    BatchSpin,
    BatchFinish,
}
