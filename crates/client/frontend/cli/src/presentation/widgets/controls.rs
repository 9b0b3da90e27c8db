//! Control buttons and the keyboard hint.

use client_frontend_core::view_model::{ButtonView, SlotView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &SlotView, theme: &RatatuiTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(28),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
        ])
        .split(area);

    let buttons = [
        (&view.primary, "SPACE", true),
        (&view.simulate, "s", false),
        (&view.math, "m", false),
        (&view.cancel, "x", false),
    ];

    for ((button, key, primary), column) in buttons.into_iter().zip(columns.iter()) {
        render_button(frame, *column, button, key, primary, theme);
    }
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    button: &ButtonView,
    key: &str,
    primary: bool,
    theme: &RatatuiTheme,
) {
    let style = theme.button(button.enabled, primary);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(key.to_string());
    let paragraph = Paragraph::new(button.label.clone())
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

pub fn render_hint(frame: &mut Frame, area: Rect, view: &SlotView, theme: &RatatuiTheme) {
    let hint = format!("{} • s/m simulate • x cancel • q quit", view.hint);
    frame.render_widget(
        Paragraph::new(hint)
            .style(theme.hint())
            .alignment(Alignment::Center),
        area,
    );
}
