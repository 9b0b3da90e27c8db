//! Wins, losses, and win rate.

use client_frontend_core::view_model::SlotView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &SlotView, theme: &RatatuiTheme) {
    let tally = &view.tally;
    let line = Line::from(vec![
        Span::raw("Wins: "),
        Span::styled(tally.wins.to_string(), theme.wins()),
        Span::raw("   Losses: "),
        Span::styled(tally.losses.to_string(), theme.losses()),
        Span::raw("   Win rate: "),
        Span::raw(tally.win_rate.clone()),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(paragraph, area);
}
