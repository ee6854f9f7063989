//! Landing screen - onboarding entry point
//!
//! Shown on first run only. Offers exactly two actions: proceed into the
//! application ("Get Started") or open the installation guide.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::LandingScreen;
use crate::style::colors;

const FEATURES: &[&str] = &[
    "Contacts, projects, and communications in one place",
    "Revenue analytics at a glance",
    "Keyboard-driven, runs anywhere a terminal runs",
];

/// Render the landing screen
pub(crate) fn render_landing(frame: &mut Frame, area: Rect, screen: &LandingScreen) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!("BizDesk {}", crate::version_string()));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Tagline
            Constraint::Length(FEATURES.len() as u16 + 1),
            Constraint::Length(3), // Action buttons
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "Welcome to BizDesk",
        Style::default()
            .fg(colors::UI_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let tagline = Paragraph::new("Run your business from the terminal")
        .style(Style::default().fg(colors::UI_SECONDARY))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[1]);

    let features: Vec<Line> = FEATURES
        .iter()
        .map(|f| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(colors::UI_SUCCESS)),
                Span::raw(*f),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(features).alignment(Alignment::Center),
        chunks[2],
    );

    render_actions(frame, chunks[3], screen.selected_action);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(colors::UI_HIGHLIGHT)),
        Span::raw(" Select  "),
        Span::styled("[Tab]", Style::default().fg(colors::UI_HIGHLIGHT)),
        Span::raw(" Switch  "),
        Span::styled("[q]", Style::default().fg(colors::UI_HIGHLIGHT)),
        Span::raw(" Quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[5]);
}

fn render_actions(frame: &mut Frame, area: Rect, selected: usize) {
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (i, label) in ["Get Started", "View Guide"].iter().enumerate() {
        let style = if selected == i {
            Style::default()
                .fg(colors::UI_SELECTED)
                .bg(colors::UI_SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::UI_TEXT)
        };
        let button = Paragraph::new(*label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, buttons[i + 1]);
    }
}
