//! Installation guide screen
//!
//! Explains how to install BizDesk as a standalone app (desktop entry +
//! `BIZDESK_STANDALONE`). Reachable from the landing page and always able to
//! return to it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::GuideScreen;
use crate::style::colors;

fn guide_lines() -> Vec<Line<'static>> {
    let step = Style::default()
        .fg(colors::UI_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from("BizDesk runs fine from any shell, but installing it as a"),
        Line::from("standalone app skips onboarding and gives it its own launcher."),
        Line::from(""),
        Line::from(Span::styled("1. Install the binary", step)),
        Line::from("   cargo install bizdesk"),
        Line::from(""),
        Line::from(Span::styled("2. Create a desktop entry", step)),
        Line::from("   ~/.local/share/applications/bizdesk.desktop:"),
        Line::from(""),
        Line::from("     [Desktop Entry]"),
        Line::from("     Name=BizDesk"),
        Line::from("     Exec=env BIZDESK_STANDALONE=1 bizdesk"),
        Line::from("     Terminal=true"),
        Line::from("     Type=Application"),
        Line::from(""),
        Line::from(Span::styled("3. Launch from your app menu", step)),
        Line::from("   BIZDESK_STANDALONE=1 tells bizdesk it is running as an"),
        Line::from("   installed app, so it opens straight into the workspace."),
        Line::from(""),
        Line::from(Span::styled("Deep links", step)),
        Line::from("   bizdesk --tab contacts    open a specific panel"),
        Line::from("   bizdesk --view app        skip the landing page for good"),
    ]
}

/// Maximum scroll offset for the guide content
pub(crate) fn max_scroll() -> u16 {
    // Keep a few lines visible at the bottom of the scroll range
    (guide_lines().len() as u16).saturating_sub(5)
}

/// Render the installation guide screen
pub(crate) fn render_guide(frame: &mut Frame, area: Rect, screen: &GuideScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let body = Paragraph::new(guide_lines())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Installation Guide"),
        )
        .wrap(Wrap { trim: false })
        .scroll((screen.scroll, 0));
    frame.render_widget(body, chunks[0]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[Esc/b]", Style::default().fg(colors::UI_HIGHLIGHT)),
        Span::raw(" Back  "),
        Span::styled("[Enter]", Style::default().fg(colors::UI_HIGHLIGHT)),
        Span::raw(" Get Started  "),
        Span::styled("[↑↓]", Style::default().fg(colors::UI_HIGHLIGHT)),
        Span::raw(" Scroll  "),
        Span::styled("[q]", Style::default().fg(colors::UI_HIGHLIGHT)),
        Span::raw(" Quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[1]);
}
