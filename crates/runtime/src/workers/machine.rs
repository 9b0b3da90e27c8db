//! Machine worker that owns the authoritative [`SlotMachine`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), maps wall
//! time onto the machine's virtual clock, and publishes events to the
//! EventBus.

use rand::Rng;
use slot_core::Millis;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant};
use tracing::{debug, info};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, MachineEvent};
use crate::machine::{Control, MachineState, SlotMachine};
use crate::simulation::SimulationReport;

/// Commands that can be sent to the machine worker
pub enum Command {
    Primary {
        reply: oneshot::Sender<Result<Control>>,
    },
    StartSpin {
        reply: oneshot::Sender<Result<()>>,
    },
    StopSpin {
        reply: oneshot::Sender<Result<()>>,
    },
    SimulateSpins {
        count: u32,
        reply: oneshot::Sender<Result<bool>>,
    },
    SimulateMath {
        count: u64,
        reply: oneshot::Sender<Result<SimulationReport>>,
    },
    CancelSimulation {
        reply: oneshot::Sender<bool>,
    },
    /// Query the current machine state (read-only).
    QueryState {
        reply: oneshot::Sender<MachineState>,
    },
}

/// Background task that serializes commands and timer expiries.
pub struct MachineWorker<R: Rng> {
    machine: SlotMachine<R>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    origin: Instant,
}

impl<R: Rng> MachineWorker<R> {
    pub fn new(
        machine: SlotMachine<R>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            machine,
            command_rx,
            event_bus,
            origin: Instant::now(),
        }
    }

    /// Main worker loop. Exits once every handle has been dropped.
    pub async fn run(mut self) {
        info!("machine worker started");
        self.publish_pending(true);

        loop {
            let deadline = self
                .machine
                .next_deadline()
                .map(|due| self.origin + due.as_duration());

            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => {
                        self.sync_clock();
                        self.handle_command(cmd);
                        // Events scheduled for "now" by the command fire right away.
                        self.sync_clock();
                    }
                    None => break,
                },
                _ = sleep_until(deadline) => self.sync_clock(),
            }

            self.publish_pending(false);
        }

        self.machine.teardown();
        self.publish_pending(false);
        info!(tally = ?self.machine.tally(), "machine worker stopped");
    }

    fn elapsed(&self) -> Millis {
        Millis::from(self.origin.elapsed())
    }

    fn sync_clock(&mut self) {
        let now = self.elapsed();
        self.machine.advance_to(now);
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Primary { reply } => {
                let result = self.machine.primary_action().map_err(RuntimeError::from);
                log_refusal(&result);
                if reply.send(result).is_err() {
                    debug!("Primary reply channel closed (caller dropped)");
                }
            }
            Command::StartSpin { reply } => {
                let result = self.machine.start_spin().map_err(RuntimeError::from);
                log_refusal(&result);
                if reply.send(result).is_err() {
                    debug!("StartSpin reply channel closed (caller dropped)");
                }
            }
            Command::StopSpin { reply } => {
                let result = self.machine.stop_spin().map_err(RuntimeError::from);
                log_refusal(&result);
                if reply.send(result).is_err() {
                    debug!("StopSpin reply channel closed (caller dropped)");
                }
            }
            Command::SimulateSpins { count, reply } => {
                let result = self
                    .machine
                    .simulate_spins(count)
                    .map_err(RuntimeError::from);
                log_refusal(&result);
                if reply.send(result).is_err() {
                    debug!("SimulateSpins reply channel closed (caller dropped)");
                }
            }
            Command::SimulateMath { count, reply } => {
                let result = self
                    .machine
                    .simulate_math(count)
                    .map_err(RuntimeError::from);
                log_refusal(&result);
                if reply.send(result).is_err() {
                    debug!("SimulateMath reply channel closed (caller dropped)");
                }
            }
            Command::CancelSimulation { reply } => {
                let cancelled = self.machine.cancel_simulation();
                if reply.send(cancelled).is_err() {
                    debug!("CancelSimulation reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.machine.state()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Publishes queued events, followed by a state copy if anything changed.
    fn publish_pending(&mut self, force_state: bool) {
        for event in self.machine.drain_events() {
            self.event_bus.publish(event);
        }
        if self.machine.take_changed() || force_state {
            self.event_bus
                .publish(Event::Machine(MachineEvent::StateChanged {
                    state: Box::new(self.machine.state()),
                }));
        }
    }
}

fn log_refusal<T>(result: &Result<T>) {
    if let Err(error) = result {
        debug!(%error, "command refused");
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
