//! UI rendering entry point composing all widgets.
use std::time::Duration;

use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};
use runtime::MachineState;

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use client_frontend_core::{LayoutMode, SimulationConfig, SlotView, message::MessageLog};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub state: &'a MachineState,
    pub simulation: &'a SimulationConfig,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
    /// Time since the current win, `None` when confetti is off or absent.
    pub confetti_elapsed: Option<Duration>,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        let area = frame.area();
        let layout = LayoutMode::for_width(area.width);
        let view = SlotView::from_state(ctx.state, ctx.simulation, layout);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(9),                           // Reels and win banner
                Constraint::Length(3),                        // Controls
                Constraint::Length(3),                        // Tally
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(1),                        // Hint
            ])
            .split(area);

        widgets::header::render(frame, chunks[0], &view, &theme);
        widgets::reels::render(frame, chunks[1], &view, &theme);
        widgets::controls::render(frame, chunks[2], &view, &theme);
        widgets::tally::render(frame, chunks[3], &view, &theme);

        let recent: Vec<_> = ctx
            .messages
            .recent(ctx.message_panel_height as usize)
            .cloned()
            .collect();
        widgets::messages::render(frame, chunks[4], &recent, ctx.message_panel_height, &theme);
        widgets::controls::render_hint(frame, chunks[5], &view, &theme);

        if let Some(elapsed) = ctx.confetti_elapsed {
            widgets::confetti::render(frame, area, &view.confetti, elapsed, &theme);
        }
    })?;

    Ok(())
}
