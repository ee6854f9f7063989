//! Analytics panel - revenue and pipeline figures

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::style::colors;

// Monthly revenue, most recent last
const REVENUE: &[(&str, u64)] = &[
    ("Mar", 9_800),
    ("Apr", 11_200),
    ("May", 10_450),
    ("Jun", 12_900),
    ("Jul", 13_600),
    ("Aug", 14_320),
];

/// Render the analytics panel
pub(crate) fn render_analytics(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Pipeline value: "),
            Span::styled(
                "$38,500",
                Style::default()
                    .fg(colors::UI_STAT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Win rate: "),
            Span::styled("62%", Style::default().fg(colors::UI_SUCCESS)),
        ]),
        Line::from(vec![
            Span::raw("Avg. invoice: "),
            Span::styled("$2,386", Style::default().fg(colors::UI_STAT)),
            Span::raw("   Outstanding: "),
            Span::styled("$4,150", Style::default().fg(colors::UI_WARNING)),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Key Figures"));
    frame.render_widget(summary, chunks[0]);

    let bars: Vec<Bar> = REVENUE
        .iter()
        .map(|(month, amount)| {
            Bar::default()
                .label(Line::from(*month))
                .value(*amount)
                .text_value(format!("{}k", amount / 1000))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Revenue by Month"),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(colors::UI_HIGHLIGHT))
        .value_style(Style::default().fg(colors::UI_TEXT));
    frame.render_widget(chart, chunks[1]);
}
