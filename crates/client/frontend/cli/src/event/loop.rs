//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Runtime event consumption (message log and the latest state copy)
//! - Keyboard input processing (machine controls)
//! - Rendering, including the frame-driven confetti animation

use std::collections::HashMap;

use anyhow::Result;
use runtime::{
    Event as RuntimeEvent, MachineEvent, MachineState, OutcomeEvent, RuntimeHandle, Topic,
};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration, Instant},
};

use crate::{
    config::CliConfig,
    input::InputHandler,
    presentation::{terminal::Tui, widgets::confetti},
};
use client_frontend_core::{EventConsumer, SimulationConfig};

const FRAME_INTERVAL_MS: u64 = 16;

type Subscription = Option<broadcast::Receiver<RuntimeEvent>>;

/// Event loop owning the latest machine state copy.
///
/// Renderers only ever read `state`, which is replaced wholesale whenever
/// the worker publishes a `StateChanged` event.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    pub(crate) handle: RuntimeHandle,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) state: MachineState,
    pub(crate) simulation: SimulationConfig,
    pub(crate) cli_config: CliConfig,
    /// Wall-clock start of the current confetti burst.
    pub(crate) confetti_started: Option<Instant>,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        handle: RuntimeHandle,
        consumer: C,
        initial_state: MachineState,
        simulation: SimulationConfig,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            subscriptions,
            handle,
            input: InputHandler::new(),
            consumer,
            state: initial_state,
            simulation,
            cli_config,
            confetti_started: None,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut machine_rx = self.subscriptions.remove(&Topic::Machine);
        let mut outcome_rx = self.subscriptions.remove(&Topic::Outcome);
        let mut simulation_rx = self.subscriptions.remove(&Topic::Simulation);

        let mut frames = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frames.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            let quit = tokio::select! {
                result = recv(&mut machine_rx) => self.handle_runtime_event(result, terminal).await?,
                result = recv(&mut outcome_rx) => self.handle_runtime_event(result, terminal).await?,
                result = recv(&mut simulation_rx) => self.handle_runtime_event(result, terminal).await?,
                _ = frames.tick() => self.handle_frame_tick(terminal).await?,
            };
            if quit {
                break;
            }
        }

        Ok(self.consumer)
    }

    /// Returns `true` when the loop should exit.
    async fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&event);
                self.apply(event);

                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events, resyncing state", skipped);
                match self.handle.query_state().await {
                    Ok(state) => {
                        self.state = state;
                        self.render(terminal)?;
                        Ok(false)
                    }
                    Err(error) => {
                        tracing::error!("Failed to resync state: {}", error);
                        Ok(true)
                    }
                }
            }
        }
    }

    fn apply(&mut self, event: RuntimeEvent) {
        match event {
            RuntimeEvent::Machine(MachineEvent::StateChanged { state }) => {
                if state.confetti.is_empty() {
                    self.confetti_started = None;
                }
                self.state = *state;
            }
            RuntimeEvent::Outcome(OutcomeEvent::Evaluated { outcome, .. }) if outcome.found() => {
                self.confetti_started = Some(Instant::now());
            }
            _ => {}
        }
    }

    /// Polls the keyboard and advances the confetti animation.
    async fn handle_frame_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if self.handle_input_tick(terminal).await? {
            return Ok(true);
        }
        if self.confetti_animating() {
            self.render(terminal)?;
        }
        Ok(false)
    }

    fn confetti_animating(&self) -> bool {
        self.cli_config.ui.show_confetti
            && self
                .confetti_started
                .is_some_and(|started| started.elapsed() < confetti::ANIMATION)
    }
}

async fn recv(rx: &mut Subscription) -> Result<RuntimeEvent, RecvError> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
