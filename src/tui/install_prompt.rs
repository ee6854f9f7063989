//! Ambient install hint
//!
//! One-line strip shown in the app view when bizdesk is running as a plain
//! shell invocation rather than an installed app. Purely informational; it
//! exchanges no state with the controller and never navigates.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::style::colors;

pub(crate) fn render_install_prompt(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("● ", Style::default().fg(colors::UI_WARNING)),
        Span::styled(
            "Running in a terminal tab; install the desktop entry for standalone mode (bizdesk --view guide)",
            Style::default().fg(colors::UI_SECONDARY),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
