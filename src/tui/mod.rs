//! Terminal User Interface for BizDesk
//!
//! Renders exactly one of three view trees (landing, guide, app) based on
//! the current view mode, and within the app tree exactly one of six panels.
//! The event loop is synchronous and single-threaded: every state change
//! happens inside a discrete input handler, then the dirty flag triggers a
//! redraw.

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;

use crate::launch::{Launch, Tab, ViewMode};
use crate::state::StateStore;
use crate::style::colors;

mod app;
mod guide;
mod input;
mod install_prompt;
mod landing;
mod panels;
mod sidebar;

#[cfg(test)]
mod tests;

pub use app::App;
use input::handle_events;

/// Sidebar width in the app view
const SIDEBAR_WIDTH: u16 = 24;

/// Run the TUI application
///
/// # Errors
/// Returns an error if terminal initialization or terminal operations fail.
pub fn run(launch: Launch, store: Box<dyn StateStore>, standalone: bool) -> Result<()> {
    // Install a panic hook to restore the terminal on panic (best-effort).
    // Wraps the existing hook (color-eyre from main) so the terminal is reset
    // before the error report is printed.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = execute!(std::io::stdout(), Show);
        original_hook(info);
    }));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Terminal guard to ensure we restore terminal state on early return
    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = disable_raw_mode();
            let mut stdout = std::io::stdout();
            let _ = execute!(stdout, LeaveAlternateScreen);
            let _ = execute!(std::io::stdout(), Show);
        }
    }
    let _term_guard = TerminalGuard;

    let mut app = App::new(launch, store, standalone);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        if app.dirty {
            terminal.draw(|frame| render_ui(frame, app))?;
            app.dirty = false;
        }
        handle_events(app)?;
    }
    Ok(())
}

/// Render the complete UI: exactly one view tree per frame
pub(crate) fn render_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.view_mode {
        ViewMode::Landing => landing::render_landing(frame, area, &app.landing_screen),
        ViewMode::Guide => guide::render_guide(frame, area, &app.guide_screen),
        ViewMode::App => render_app_tree(frame, area, app),
    }
}

/// Render the main application tree: sidebar, active panel, ambient install
/// hint, and footer
fn render_app_tree(frame: &mut Frame, area: Rect, app: &App) {
    // Install hint only when not running as an installed app
    let hint_height = u16::from(!app.standalone);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(hint_height),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[0]);

    sidebar::render_sidebar(frame, columns[0], app.active_tab);
    render_panel(frame, columns[1], app.active_tab);

    if !app.standalone {
        install_prompt::render_install_prompt(frame, chunks[1]);
    }

    render_footer(frame, chunks[2], app.status_message.as_ref());
}

/// Map the active tab to exactly one panel
fn render_panel(frame: &mut Frame, area: Rect, active_tab: Tab) {
    match active_tab {
        Tab::Dashboard => panels::render_dashboard(frame, area),
        Tab::Contacts => panels::render_contacts(frame, area),
        Tab::Communications => panels::render_communications(frame, area),
        Tab::Projects => panels::render_projects(frame, area),
        Tab::Analytics => panels::render_analytics(frame, area),
        Tab::Settings => panels::render_settings(frame, area),
    }
}

/// Render the footer with keyboard shortcuts or a status message
fn render_footer(frame: &mut Frame, area: Rect, status_message: Option<&String>) {
    let text = if let Some(msg) = status_message {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(colors::UI_WARNING)),
            Span::styled(msg.as_str(), Style::default().fg(colors::UI_TEXT)),
        ])
    } else {
        Line::from(vec![
            Span::raw("[q] Quit  "),
            Span::styled("[Tab/Shift-Tab]", Style::default().fg(colors::UI_HIGHLIGHT)),
            Span::raw(" Cycle panels  "),
            Span::styled("[d c m p a s]", Style::default().fg(colors::UI_HIGHLIGHT)),
            Span::raw(" Jump to panel"),
        ])
    };
    frame.render_widget(Paragraph::new(text), area);
}
