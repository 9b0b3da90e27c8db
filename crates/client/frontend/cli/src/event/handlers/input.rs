//! Input handling (keyboard to machine controls).

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use runtime::RuntimeError;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for keyboard input without blocking the frame.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch the matching control.
    pub(in crate::event) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let result = match self.input.handle_key(key) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                self.render(terminal)?;
                return Ok(true);
            }
            KeyAction::None => return Ok(false),
            KeyAction::Primary => self.handle.primary_action().await.map(|control| {
                tracing::debug!("Primary control resolved to {}", control);
            }),
            KeyAction::SimulateSpins => {
                let count = self.simulation.batch_spins;
                self.handle.simulate_spins(count).await.map(|started| {
                    if !started {
                        self.consumer
                            .message_log_mut()
                            .push_warning("A simulation is already running");
                    }
                })
            }
            // The summary arrives as a simulation event.
            KeyAction::SimulateMath => self
                .handle
                .simulate_math(self.simulation.math_spins)
                .await
                .map(|_| ()),
            KeyAction::CancelSimulation => self.handle.cancel_simulation().await.map(|cancelled| {
                if !cancelled {
                    self.consumer
                        .message_log_mut()
                        .push_text("No simulation to cancel");
                }
            }),
        };

        match result {
            Ok(()) => {}
            Err(error) if error.is_refused() => {
                tracing::debug!("Control refused: {}", error);
                self.consumer.message_log_mut().push_warning(refusal_text(&error));
            }
            Err(error) => {
                tracing::error!("Runtime unavailable: {}", error);
                return Ok(true);
            }
        }

        self.render(terminal)?;
        Ok(false)
    }
}

fn refusal_text(error: &RuntimeError) -> String {
    match error {
        RuntimeError::Machine(inner) => capitalize(&inner.to_string()),
        other => other.to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
