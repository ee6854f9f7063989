//! TUI subsystem tests
//!
//! These live under `src/tui/tests/` (rather than the top-level `tests/`
//! directory) because they exercise `pub(crate)` internals: the key-event
//! dispatcher and the frame renderer.


use crate::launch::{Launch, Tab, ViewMode};
use crate::state::MemoryStateStore;
use crate::tui::App;

/// Build an app over an in-memory store, starting in the given state
pub(crate) fn make_app(view_mode: ViewMode, active_tab: Tab) -> App {
    let launch = Launch {
        view_mode,
        active_tab,
        flag_written: false,
    };
    App::new(launch, Box::new(MemoryStateStore::new()), false)
}

/// Render one frame into a test backend and flatten it to a string
pub(crate) fn render_to_text(app: &App) -> String {
    let backend = ratatui::backend::TestBackend::new(100, 32);
    let mut terminal = ratatui::Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| crate::tui::render_ui(frame, app))
        .expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}
