//! Projects panel - active work tracker

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::style::colors;

// (name, client, progress 0..=100)
const PROJECTS: &[(&str, &str, u16)] = &[
    ("Spring campaign", "Meridian Retail", 35),
    ("Website refresh", "Northwind Trading", 70),
    ("Brand guidelines", "Fontaine Design", 90),
    ("Import logistics audit", "Sakura Imports", 15),
];

/// Render the projects panel as one progress gauge per project
pub(crate) fn render_projects(frame: &mut Frame, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!("Projects ({} active)", PROJECTS.len()));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let constraints: Vec<Constraint> = PROJECTS
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (name, client, progress)) in PROJECTS.iter().enumerate() {
        let color = match progress {
            0..=33 => colors::UI_WARNING,
            34..=66 => colors::UI_HIGHLIGHT,
            _ => colors::UI_SUCCESS,
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{name} ({client})")),
            )
            .gauge_style(Style::default().fg(color))
            .percent(*progress);
        frame.render_widget(gauge, rows[i]);
    }
}
