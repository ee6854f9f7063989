//! Sidebar - fixed panel navigation
//!
//! Consumes the current `active_tab`; selection events are handled by the
//! input layer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::launch::Tab;
use crate::style::colors;

/// Render the sidebar with one entry per panel
pub(crate) fn render_sidebar(frame: &mut Frame, area: Rect, active_tab: Tab) {
    let items: Vec<ListItem> = Tab::all()
        .iter()
        .map(|&tab| {
            let selected = tab == active_tab;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(colors::UI_SELECTED)
                    .bg(colors::UI_SELECTED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::UI_TEXT)
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("[{}] ", tab.key()), Style::default().fg(colors::UI_HIGHLIGHT)),
                Span::raw(tab.name()),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("BizDesk {}", crate::version_string())),
    );
    frame.render_widget(list, area);
}
