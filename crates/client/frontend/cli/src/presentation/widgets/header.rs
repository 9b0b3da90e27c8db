//! Header widget with the title, phase, and batch progress.

use client_frontend_core::view_model::{SlotView, TITLE};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &SlotView, theme: &RatatuiTheme) {
    let mut spans = vec![
        Span::styled(TITLE, theme.title()),
        Span::raw("  "),
        Span::styled(view.phase.to_string(), Style::default().fg(Color::Yellow)),
    ];
    if let Some(batch) = &view.batch {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(batch.clone(), Style::default().fg(Color::LightBlue)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
