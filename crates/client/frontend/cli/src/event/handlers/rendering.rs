//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::EventConsumer;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Render the latest state copy.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let confetti_elapsed = self
            .confetti_started
            .filter(|_| self.cli_config.ui.show_confetti)
            .map(|started| started.elapsed());

        let ctx = ui::RenderContext {
            state: &self.state,
            simulation: &self.simulation,
            messages: self.consumer.message_log(),
            message_panel_height: self.cli_config.ui.message_panel_height,
            confetti_elapsed,
        };

        ui::render(terminal, &ctx)
    }
}
