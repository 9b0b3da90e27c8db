//! The slot machine state machine.
//!
//! [`SlotMachine`] owns the reels, the tally, and every timer. All timers run
//! on one [`Scheduler`] over a virtual millisecond clock; callers move time
//! forward with [`SlotMachine::advance_to`]. The worker maps wall time onto
//! that clock, tests drive it directly.
mod error;
mod phase;
mod timer;

pub use error::MachineError;
pub use phase::{Control, Controls, MachineState, Phase, PrimaryControl, SpinSession};

use rand::Rng;
use rand::rngs::StdRng;
use slot_core::confetti;
use slot_core::{
    ConfettiBurst, ConfigError, Millis, Reel, ReelSet, SlotConfig, Snapshot, Tally, evaluate,
};
use tracing::{debug, info, trace};

use crate::events::{Event, MachineEvent, OutcomeEvent, SimulationEvent};
use crate::scheduler::{Fired, Scheduler, TimerId};
use crate::simulation::{BatchRun, SimulationReport, statistical};
use timer::TimerEvent;

const LAST_REEL: usize = SlotConfig::REEL_COUNT - 1;

pub struct SlotMachine<R: Rng = StdRng> {
    config: SlotConfig,
    rng: R,
    scheduler: Scheduler<TimerEvent>,
    reels: ReelSet,
    settled: [bool; SlotConfig::REEL_COUNT],
    tally: Tally,
    phase: Phase,
    confetti: ConfettiBurst,
    spin_timers: [Option<TimerId>; SlotConfig::REEL_COUNT],
    auto_stop: Option<TimerId>,
    batch: Option<BatchRun>,
    batch_timer: Option<TimerId>,
    outbox: Vec<Event>,
    changed: bool,
}

impl<R: Rng> SlotMachine<R> {
    pub fn new(config: SlotConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            scheduler: Scheduler::new(),
            reels: ReelSet::zeroed(),
            settled: [false; SlotConfig::REEL_COUNT],
            tally: Tally::new(),
            phase: Phase::Idle,
            confetti: ConfettiBurst::new(),
            spin_timers: [None; SlotConfig::REEL_COUNT],
            auto_stop: None,
            batch: None,
            batch_timer: None,
            outbox: Vec::new(),
            changed: false,
        })
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    pub fn now(&self) -> Millis {
        self.scheduler.now()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn reels(&self) -> &ReelSet {
        &self.reels
    }

    pub fn is_simulating(&self) -> bool {
        self.batch.is_some()
    }

    /// Number of timers still scheduled.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Time of the next scheduled event, if any.
    pub fn next_deadline(&mut self) -> Option<Millis> {
        self.scheduler.next_due()
    }

    pub fn state(&self) -> MachineState {
        MachineState {
            now: self.now(),
            phase: self.phase,
            reels: self.reels,
            settled: self.settled,
            tally: self.tally,
            confetti: self.confetti.clone(),
            batch: self.batch.as_ref().map(BatchRun::progress),
        }
    }

    /// Takes the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }

    /// Returns whether observable state changed since the last call.
    pub fn take_changed(&mut self) -> bool {
        std::mem::replace(&mut self.changed, false)
    }

    // ===== controls =====

    /// Space-bar behaviour: start when idle, stop when spinning.
    pub fn primary_action(&mut self) -> Result<Control, MachineError> {
        match self.phase.session() {
            SpinSession {
                spinning: false, ..
            } => self.start_spin().map(|()| Control::Spin),
            SpinSession {
                stopping: false, ..
            } => self.stop_spin().map(|()| Control::Stop),
            _ => Err(MachineError::ControlDisabled {
                control: Control::Stop,
                phase: self.phase,
            }),
        }
    }

    pub fn start_spin(&mut self) -> Result<(), MachineError> {
        if self.phase.is_busy() {
            return Err(MachineError::ControlDisabled {
                control: Control::Spin,
                phase: self.phase,
            });
        }

        self.phase = Phase::Spinning;
        self.confetti.clear();
        self.settled = [false; SlotConfig::REEL_COUNT];
        for reel in 0..SlotConfig::REEL_COUNT {
            let id = self
                .scheduler
                .schedule_after(self.config.spin_interval, TimerEvent::SpinTick { reel });
            self.spin_timers[reel] = Some(id);
        }
        self.auto_stop = Some(
            self.scheduler
                .schedule_after(self.config.auto_stop_delay, TimerEvent::AutoStop),
        );

        debug!(at = %self.now(), "spin started");
        self.emit(Event::Machine(MachineEvent::SpinStarted { at: self.now() }));
        Ok(())
    }

    pub fn stop_spin(&mut self) -> Result<(), MachineError> {
        if self.phase != Phase::Spinning {
            return Err(MachineError::ControlDisabled {
                control: Control::Stop,
                phase: self.phase,
            });
        }
        self.begin_stop(false);
        Ok(())
    }

    /// Starts `count` animated spins back to back.
    ///
    /// Returns `Ok(false)` without doing anything when a batch is already
    /// running or `count` is zero.
    pub fn simulate_spins(&mut self, count: u32) -> Result<bool, MachineError> {
        if self.batch.is_some() {
            debug!("batch simulation already running; ignoring request");
            return Ok(false);
        }
        if self.phase.is_busy() {
            return Err(MachineError::ControlDisabled {
                control: Control::SimulateSpins,
                phase: self.phase,
            });
        }
        if count == 0 {
            return Ok(false);
        }

        self.batch = Some(BatchRun::new(count));
        self.batch_timer = Some(
            self.scheduler
                .schedule_after(Millis::ZERO, TimerEvent::BatchSpin),
        );
        info!(count, "batch simulation started");
        self.emit(Event::Simulation(SimulationEvent::BatchStarted { total: count }));
        Ok(true)
    }

    /// Evaluates `count` random grids without animating and merges the
    /// counts into the tally.
    pub fn simulate_math(&mut self, count: u64) -> Result<SimulationReport, MachineError> {
        if self.batch.is_some() {
            return Err(MachineError::SimulationRunning {
                control: Control::SimulateMath,
            });
        }
        if self.phase.is_busy() {
            return Err(MachineError::ControlDisabled {
                control: Control::SimulateMath,
                phase: self.phase,
            });
        }

        let report = statistical::run(&mut self.rng, count);
        self.tally.merge(report.wins, report.losses);

        info!(
            count,
            wins = report.wins,
            losses = report.losses,
            "Math simulation ({count} spins) finished. Win rate: {:.2}%",
            report.win_rate_percent()
        );
        for sample in &report.samples {
            debug!(snapshot = %sample.snapshot, outcome = %sample.outcome, "sample");
        }

        self.emit(Event::Simulation(SimulationEvent::MathCompleted {
            report: report.clone(),
        }));
        Ok(report)
    }

    /// Interrupts a running batch. The spin in flight finishes normally.
    pub fn cancel_simulation(&mut self) -> bool {
        let Some(batch) = self.batch.take() else {
            return false;
        };
        if let Some(id) = self.batch_timer.take() {
            self.scheduler.cancel(id);
        }
        info!(started = batch.progress().started, "batch simulation cancelled");
        self.emit(Event::Simulation(SimulationEvent::BatchFinished {
            progress: batch.progress(),
            cancelled: true,
        }));
        true
    }

    /// Releases every timer and cancels any batch. The tally is kept.
    pub fn teardown(&mut self) {
        self.cancel_simulation();
        let released = self.scheduler.clear();
        self.spin_timers = [None; SlotConfig::REEL_COUNT];
        self.auto_stop = None;
        if self.phase.is_busy() {
            self.phase = Phase::Idle;
        }
        self.changed = true;
        debug!(released, "machine torn down");
    }

    // ===== clock =====

    /// Fires every event due at or before `now`, in order. Each handler sees
    /// its own due time as the current time.
    pub fn advance_to(&mut self, now: Millis) {
        while let Some(fired) = self.scheduler.pop_due(now) {
            self.handle(fired);
        }
        self.scheduler.advance_clock(now);
    }

    fn handle(&mut self, fired: Fired<TimerEvent>) {
        match fired.event {
            TimerEvent::SpinTick { reel } => {
                self.shift_reel(reel);
                trace!(reel, at = %fired.due, "spin tick");
                self.spin_timers[reel] = Some(
                    self.scheduler
                        .schedule_after(self.config.spin_interval, TimerEvent::SpinTick { reel }),
                );
            }
            TimerEvent::AutoStop => {
                self.auto_stop = None;
                if self.phase == Phase::Spinning {
                    self.begin_stop(true);
                }
            }
            TimerEvent::Decelerate { reel, step } => {
                self.shift_reel(reel);
                self.phase = Phase::Decelerating { reel, step };
                trace!(reel, step, at = %fired.due, "deceleration step");
            }
            TimerEvent::Settle { reel } => self.settle(reel),
            TimerEvent::Evaluate { snapshot } => self.finish_spin(snapshot),
            TimerEvent::BatchSpin => self.batch_spin(),
            TimerEvent::BatchFinish => {
                self.batch_timer = None;
                if let Some(batch) = self.batch.take() {
                    info!(spins = batch.progress().started, "batch simulation finished");
                    self.emit(Event::Simulation(SimulationEvent::BatchFinished {
                        progress: batch.progress(),
                        cancelled: false,
                    }));
                }
            }
        }
    }

    fn shift_reel(&mut self, reel: usize) {
        let next = self.reels.reel(reel).spun(&mut self.rng);
        self.reels = self.reels.with_reel(reel, next);
        self.changed = true;
    }

    /// Replaces the spin ticks with the staggered stop schedule.
    fn begin_stop(&mut self, auto: bool) {
        for id in self.spin_timers.iter_mut().filter_map(Option::take) {
            self.scheduler.cancel(id);
        }
        if let Some(id) = self.auto_stop.take() {
            self.scheduler.cancel(id);
        }

        let now = self.now();
        for reel in 0..SlotConfig::REEL_COUNT {
            let mut at = now + self.config.reel_base(reel);
            for (step, duration) in self.config.deceleration_steps.iter().enumerate() {
                self.scheduler
                    .schedule_at(at, TimerEvent::Decelerate { reel, step });
                at = at + *duration;
            }
            self.scheduler.schedule_at(at, TimerEvent::Settle { reel });
        }

        self.phase = Phase::Decelerating { reel: 0, step: 0 };
        debug!(auto, at = %now, "stop sequence scheduled");
        self.emit(Event::Machine(MachineEvent::StopRequested { at: now, auto }));
    }

    fn settle(&mut self, reel: usize) {
        let window = Reel::settled(&mut self.rng);
        self.reels = self.reels.with_reel(reel, window);
        self.settled[reel] = true;
        debug!(reel, at = %self.now(), "reel settled");
        self.emit(Event::Machine(MachineEvent::ReelSettled {
            reel,
            window: *window.window(),
            at: self.now(),
        }));

        if reel == LAST_REEL {
            let snapshot = self.reels.snapshot();
            self.scheduler
                .schedule_after(self.config.evaluation_delay, TimerEvent::Evaluate { snapshot });
            self.phase = Phase::Evaluating;
        } else {
            self.phase = Phase::Settling { reel };
        }
    }

    fn finish_spin(&mut self, snapshot: Snapshot) {
        let outcome = evaluate(&snapshot);
        self.tally.record(&outcome);
        self.phase = Phase::Displaying(outcome);

        if outcome.found() {
            self.confetti = confetti::burst(&mut self.rng);
            info!(reason = %outcome, %snapshot, "WIN");
        } else {
            self.confetti.clear();
            info!(reason = %outcome, %snapshot, "LOSS");
        }

        self.emit(Event::Outcome(OutcomeEvent::Evaluated {
            outcome,
            snapshot,
            tally: self.tally,
            at: self.now(),
        }));
    }

    fn batch_spin(&mut self) {
        let Some(batch) = self.batch.as_mut() else {
            self.batch_timer = None;
            return;
        };
        let index = batch.record_start();
        let progress = batch.progress();
        let last = batch.is_complete();

        if let Err(error) = self.start_spin() {
            debug!(index, %error, "batch spin skipped");
        }
        self.emit(Event::Simulation(SimulationEvent::BatchSpinStarted { progress }));

        let wait = self.config.estimated_spin_duration() + self.config.batch_pause;
        let next = if last {
            TimerEvent::BatchFinish
        } else {
            TimerEvent::BatchSpin
        };
        self.batch_timer = Some(self.scheduler.schedule_after(wait, next));
    }

    fn emit(&mut self, event: Event) {
        self.outbox.push(event);
        self.changed = true;
    }
}
