//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the machine or streaming events from specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::machine::{Control, MachineState};
use crate::simulation::SimulationReport;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Start when idle, stop when spinning. Returns the control that ran.
    pub async fn primary_action(&self) -> Result<Control> {
        self.request(|reply| Command::Primary { reply }).await?
    }

    pub async fn start_spin(&self) -> Result<()> {
        self.request(|reply| Command::StartSpin { reply }).await?
    }

    pub async fn stop_spin(&self) -> Result<()> {
        self.request(|reply| Command::StopSpin { reply }).await?
    }

    /// Run `count` animated spins back to back.
    ///
    /// Resolves as soon as the batch is scheduled; `false` means a batch was
    /// already running (or `count` was zero) and nothing changed.
    pub async fn simulate_spins(&self, count: u32) -> Result<bool> {
        self.request(|reply| Command::SimulateSpins { count, reply })
            .await?
    }

    /// Evaluate `count` random grids without animation.
    pub async fn simulate_math(&self, count: u64) -> Result<SimulationReport> {
        self.request(|reply| Command::SimulateMath { count, reply })
            .await?
    }

    /// Interrupt a running batch. Returns `false` if none was running.
    pub async fn cancel_simulation(&self) -> Result<bool> {
        self.request(|reply| Command::CancelSimulation { reply })
            .await
    }

    /// Query the current machine state (read-only copy)
    pub async fn query_state(&self) -> Result<MachineState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Machine` - Spin lifecycle, reel settles, state copies
    /// - `Topic::Outcome` - Evaluated outcomes
    /// - `Topic::Simulation` - Batch progress and math reports
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
