//! Dashboard panel - business overview

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::style::colors;

const RECENT_ACTIVITY: &[(&str, &str)] = &[
    ("Today 09:14", "Invoice #2041 sent to Harbor & Sons"),
    ("Today 08:30", "Call scheduled with Meridian Retail"),
    ("Yesterday", "Project 'Spring campaign' moved to In Progress"),
    ("Yesterday", "New contact added: L. Okafor (Northwind)"),
    ("Mon", "Payment received: $1,850.00"),
];

/// Render the dashboard panel
pub(crate) fn render_dashboard(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    render_summary_cards(frame, chunks[0]);

    let items: Vec<ListItem> = RECENT_ACTIVITY
        .iter()
        .map(|(when, what)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{when:<12}"), Style::default().fg(colors::UI_SECONDARY)),
                Span::raw(*what),
            ]))
        })
        .collect();
    let activity = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Activity"),
    );
    frame.render_widget(activity, chunks[1]);
}

fn render_summary_cards(frame: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let data = [
        ("Contacts", "48"),
        ("Open Projects", "6"),
        ("Unread Messages", "12"),
        ("Revenue (MTD)", "$14,320"),
    ];

    for (i, (label, value)) in data.iter().enumerate() {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                *value,
                Style::default()
                    .fg(colors::UI_STAT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(colors::UI_SECONDARY))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, cards[i]);
    }
}
