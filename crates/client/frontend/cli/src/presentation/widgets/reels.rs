//! Reel columns, the win line highlight, and the winner banner.

use client_frontend_core::view_model::{ReelView, SlotView, WinBanner};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Reel box size: three digit rows plus borders.
const REEL_WIDTH: u16 = 9;
const REEL_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, view: &SlotView, theme: &RatatuiTheme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(REEL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .flex(Flex::Center)
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(REEL_WIDTH); 3])
        .spacing(2)
        .flex(Flex::Center)
        .split(rows[0]);

    for (reel, column) in view.reels.iter().zip(columns.iter()) {
        render_reel(frame, *column, reel, theme);
    }

    let footer = match &view.win {
        Some(banner) => banner_lines(banner, theme),
        None => vec![Line::from(view.status.clone())],
    };
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        rows[2],
    );
}

fn render_reel(frame: &mut Frame, area: Rect, reel: &ReelView, theme: &RatatuiTheme) {
    let lines: Vec<Line> = reel
        .symbols
        .iter()
        .zip(reel.highlighted)
        .map(|(symbol, highlighted)| {
            Line::from(Span::styled(
                format!("  {symbol}  "),
                theme.cell(reel.settled, highlighted),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.reel_border(reel.settled)),
    );
    frame.render_widget(paragraph, area);
}

fn banner_lines(banner: &WinBanner, theme: &RatatuiTheme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(WinBanner::TITLE, theme.win_banner())),
        Line::from(banner.headline),
        Line::from(banner.reason.clone()),
    ]
}
