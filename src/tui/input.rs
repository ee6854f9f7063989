//! Input handling for keyboard events
//!
//! Each view mode has its own key map; quit shortcuts are global. All
//! handlers run to completion on the UI thread, so every transition is
//! atomic from the model's perspective.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::app::App;
use super::guide;
use crate::launch::{Tab, ViewMode};

/// Poll timeout for event checking (non-blocking)
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Poll for and handle the next input event, if any
///
/// # Errors
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        match event::read()? {
            Event::Key(key_event) => handle_key_event(app, key_event),
            Event::Resize(_, _) => {
                app.dirty = true;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Key release events would double-fire every action on some terminals
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+C always quits immediately
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.view_mode {
        ViewMode::Landing => handle_landing_key(app, key),
        ViewMode::Guide => handle_guide_key(app, key),
        ViewMode::App => handle_app_key(app, key),
    }
}

fn handle_landing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Two actions: Get Started / View Guide
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            if matches!(key.code, KeyCode::Up | KeyCode::Left) {
                app.landing_screen.select_previous();
            } else {
                app.landing_screen.select_next();
            }
            app.dirty = true;
        }
        KeyCode::Tab => {
            app.landing_screen.select_next();
            app.dirty = true;
        }

        KeyCode::Enter => {
            if app.landing_screen.selected_action == 0 {
                app.get_started();
            } else {
                app.view_guide();
            }
        }

        // Direct shortcuts mirroring the two actions
        KeyCode::Char('s') => app.get_started(),
        KeyCode::Char('g') => app.view_guide(),

        _ => {}
    }
}

fn handle_guide_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => app.back_to_landing(),

        KeyCode::Enter | KeyCode::Char('s') => app.get_started(),

        KeyCode::Down | KeyCode::Char('j') => {
            app.guide_screen.scroll_down(guide::max_scroll());
            app.dirty = true;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.guide_screen.scroll_up();
            app.dirty = true;
        }

        _ => {}
    }
}

fn handle_app_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Panel cycling
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),

        // Direct panel shortcuts (letter per panel, plus 1-6)
        KeyCode::Char(c) => {
            if let Some(&tab) = Tab::all().iter().find(|t| t.key() == c) {
                app.select_tab(tab);
            } else if let Some(digit) = c.to_digit(10) {
                let idx = digit as usize;
                if (1..=Tab::all().len()).contains(&idx) {
                    app.select_tab(Tab::all()[idx - 1]);
                }
            }
        }

        KeyCode::Esc => app.clear_status(),

        _ => {}
    }
}

/// Feed a key event straight into the dispatcher (test hook)
#[cfg(test)]
pub(crate) fn simulate_key_event(app: &mut App, key: KeyEvent) {
    handle_key_event(app, key);
}
