//! Communications panel - message inbox

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::style::colors;

// (unread, from, subject, when)
const MESSAGES: &[(bool, &str, &str, &str)] = &[
    (true, "M. Reyes", "Re: Q3 invoice schedule", "09:02"),
    (true, "J. Lindqvist", "Demo follow-up questions", "08:41"),
    (false, "A. Fontaine", "Logo revisions attached", "Yesterday"),
    (true, "K. Tanaka", "Shipment delayed one week", "Yesterday"),
    (false, "S. Whitfield", "Contract draft for review", "Mon"),
    (false, "L. Okafor", "Thanks for the quick turnaround", "Mon"),
];

/// Render the communications panel
pub(crate) fn render_communications(frame: &mut Frame, area: Rect) {
    let unread = MESSAGES.iter().filter(|(u, ..)| *u).count();

    let items: Vec<ListItem> = MESSAGES
        .iter()
        .map(|(is_unread, from, subject, when)| {
            let marker = if *is_unread { "● " } else { "  " };
            let subject_style = if *is_unread {
                Style::default()
                    .fg(colors::UI_TEXT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::UI_SECONDARY)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(colors::UI_HIGHLIGHT)),
                Span::styled(format!("{from:<14}"), Style::default().fg(colors::UI_TEXT)),
                Span::styled(format!("{subject:<34}"), subject_style),
                Span::styled(*when, Style::default().fg(colors::UI_SECONDARY)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Communications ({unread} unread)")),
    );
    frame.render_widget(list, area);
}
