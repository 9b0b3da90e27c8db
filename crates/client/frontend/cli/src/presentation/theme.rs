//! Ratatui styling for the slot machine.
//!
//! Colors follow a dark neon palette: cyan title, magenta win accents.

use client_frontend_core::message::MessageLevel;
use ratatui::style::{Color, Modifier, Style};
use slot_core::ConfettiColor;

/// Consistent color scheme for every widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Digit cell on a reel.
    pub fn cell(&self, settled: bool, highlighted: bool) -> Style {
        if highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else if settled {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        }
    }

    pub fn reel_border(&self, settled: bool) -> Style {
        if settled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn win_banner(&self) -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(&self, enabled: bool, primary: bool) -> Style {
        match (enabled, primary) {
            (false, _) => Style::default().fg(Color::DarkGray),
            (true, true) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::LightBlue),
        }
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn wins(&self) -> Style {
        Style::default().fg(Color::LightGreen)
    }

    pub fn losses(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Win => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn confetti(&self, color: ConfettiColor) -> Color {
        match color {
            ConfettiColor::Magenta => Color::Magenta,
            ConfettiColor::Blue => Color::LightBlue,
            ConfettiColor::Green => Color::LightGreen,
            ConfettiColor::Amber => Color::Yellow,
            ConfettiColor::Violet => Color::LightMagenta,
        }
    }
}
