//! Settings panel - workspace preferences overview

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::style::colors;

const SETTINGS: &[(&str, &str)] = &[
    ("Business name", "Example Studio LLC"),
    ("Currency", "USD"),
    ("Fiscal year start", "January"),
    ("Invoice numbering", "BD-{year}-{seq}"),
    ("Reminder emails", "enabled"),
    ("Weekly digest", "Monday 08:00"),
];

/// Render the settings panel
pub(crate) fn render_settings(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = SETTINGS
        .iter()
        .map(|(key, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{key:<20}"), Style::default().fg(colors::UI_SECONDARY)),
                Span::styled(*value, Style::default().fg(colors::UI_TEXT)),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Settings"));
    frame.render_widget(list, area);
}
