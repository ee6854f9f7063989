//! TUI application state machine
//!
//! Owns the two pieces of view state (`view_mode`, `active_tab`) and the
//! transitions between them. Initial values come from startup resolution;
//! after that, state changes only through the explicit user actions below.
//!
//! The app view is a one-way gate: once the user is in the main application
//! there is no path back to the landing page or the guide. That matches the
//! product behavior, not an oversight.

use crate::launch::{Launch, Tab, ViewMode, HAS_SEEN_LANDING_KEY};
use crate::state::StateStore;

/// Landing screen scratch state
pub struct LandingScreen {
    /// 0 = Get Started, 1 = View Guide
    pub selected_action: usize,
}

impl LandingScreen {
    pub(crate) fn new() -> Self {
        Self { selected_action: 0 }
    }

    pub(crate) fn select_next(&mut self) {
        self.selected_action = (self.selected_action + 1) % 2;
    }

    pub(crate) fn select_previous(&mut self) {
        self.selected_action = (self.selected_action + 1) % 2;
    }
}

/// Installation guide scratch state
pub struct GuideScreen {
    /// Lines scrolled down from the top of the guide text
    pub scroll: u16,
}

impl GuideScreen {
    pub(crate) fn new() -> Self {
        Self { scroll: 0 }
    }

    pub(crate) fn scroll_down(&mut self, max: u16) {
        self.scroll = (self.scroll + 1).min(max);
    }

    pub(crate) fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

/// Application state
pub struct App {
    /// Currently active top-level view
    pub view_mode: ViewMode,
    /// Currently active panel (only visible while `view_mode` is `App`)
    pub active_tab: Tab,
    /// Durable flag store (injected; file-backed in production)
    pub(crate) store: Box<dyn StateStore>,
    /// Whether this session was launched as an installed/standalone app
    pub standalone: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message shown in the footer (errors, confirmations)
    pub status_message: Option<String>,
    /// Whether the UI needs to be redrawn
    pub dirty: bool,

    /// Landing screen state
    pub landing_screen: LandingScreen,
    /// Guide screen state
    pub guide_screen: GuideScreen,
}

impl App {
    /// Create the application from a resolved launch state
    pub fn new(launch: Launch, store: Box<dyn StateStore>, standalone: bool) -> Self {
        Self {
            view_mode: launch.view_mode,
            active_tab: launch.active_tab,
            store,
            standalone,
            should_quit: false,
            status_message: None,
            dirty: true,
            landing_screen: LandingScreen::new(),
            guide_screen: GuideScreen::new(),
        }
    }

    /// Proceed past the landing page into the main application.
    ///
    /// Persists the first-run flag so later sessions skip onboarding. A
    /// failed write is surfaced as a status message but never blocks the
    /// user on the landing page.
    pub fn get_started(&mut self) {
        if let Err(e) = self.store.set(HAS_SEEN_LANDING_KEY, "true") {
            self.set_status(format!("Could not save onboarding state: {e:#}"));
        }
        self.view_mode = ViewMode::App;
        self.dirty = true;
    }

    /// Open the installation guide (no persistence)
    pub fn view_guide(&mut self) {
        self.view_mode = ViewMode::Guide;
        self.dirty = true;
    }

    /// Return from the guide to the landing page
    pub fn back_to_landing(&mut self) {
        self.view_mode = ViewMode::Landing;
        self.dirty = true;
    }

    /// Switch to a specific panel (stays within the app view)
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.clear_status();
    }

    /// Switch to the next panel in the cycle
    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    /// Switch to the previous panel in the cycle
    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    /// Set a status message to display to the user
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.dirty = true;
    }

    /// Clear the current status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.dirty = true;
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
        self.dirty = true;
    }
}
