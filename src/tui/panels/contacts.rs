//! Contacts panel - client and vendor directory

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::style::colors;

const CONTACTS: &[(&str, &str, &str, &str)] = &[
    ("L. Okafor", "Northwind Trading", "l.okafor@northwind.example", "Client"),
    ("M. Reyes", "Harbor & Sons", "m.reyes@harbor.example", "Client"),
    ("J. Lindqvist", "Meridian Retail", "jl@meridian.example", "Prospect"),
    ("A. Fontaine", "Fontaine Design", "anne@fontaine.example", "Vendor"),
    ("S. Whitfield", "Whitfield Legal", "sw@whitfield.example", "Vendor"),
    ("K. Tanaka", "Sakura Imports", "ktanaka@sakura.example", "Client"),
];

/// Render the contacts panel
pub(crate) fn render_contacts(frame: &mut Frame, area: Rect) {
    let header = Row::new(["Name", "Company", "Email", "Type"])
        .style(
            Style::default()
                .fg(colors::UI_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = CONTACTS.iter().map(|(name, company, email, kind)| {
        let kind_style = match *kind {
            "Client" => Style::default().fg(colors::UI_SUCCESS),
            "Prospect" => Style::default().fg(colors::UI_WARNING),
            _ => Style::default().fg(colors::UI_SECONDARY),
        };
        Row::new(vec![
            Cell::from(*name),
            Cell::from(*company),
            Cell::from(*email).style(Style::default().fg(colors::UI_SECONDARY)),
            Cell::from(*kind).style(kind_style),
        ])
    });

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Length(14),
            ratatui::layout::Constraint::Length(20),
            ratatui::layout::Constraint::Min(24),
            ratatui::layout::Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Contacts ({})", CONTACTS.len())),
    );

    frame.render_widget(table, area);
}
