//! Messages widget displaying recent machine events.

use client_frontend_core::message::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the message log panel.
///
/// `messages` arrive newest first and are drawn bottom-to-top, so the
/// newest entry sits on the bottom line.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    messages: &[MessageEntry],
    panel_height: u16,
    theme: &RatatuiTheme,
) {
    let mut items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < panel_height as usize {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with optional machine timestamp.
fn format_message(entry: &MessageEntry) -> String {
    match entry.timestamp {
        Some(ts) => format!("[{:>6}ms] {}", ts, entry.text),
        None => entry.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::message::MessageLevel;

    #[test]
    fn timestamps_are_right_aligned() {
        let entry = MessageEntry::new("Auto-stop", Some(1500), MessageLevel::Info);
        assert_eq!(format_message(&entry), "[  1500ms] Auto-stop");

        let entry = MessageEntry::new("Welcome", None, MessageLevel::Info);
        assert_eq!(format_message(&entry), "Welcome");
    }
}
