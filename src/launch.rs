//! Startup view resolution
//!
//! Computes the initial (view mode, active tab) pair from three independent
//! signals: the durable first-run flag, the standalone/installed signal, and
//! the deep-link parameters of the launch request. Runs exactly once per
//! session, before the first frame is drawn.
//!
//! The resolution is a priority cascade: rules are applied in order and a
//! later match overrides earlier state. A tab deep link is the strongest
//! signal of intent, an explicit `--view app` request is next, and the
//! ambient returning-user/installed signals are the weakest.

use serde::Serialize;
use tracing::{debug, warn};

use crate::state::StateStore;

/// Durable flag key marking that the user has passed the landing page
pub const HAS_SEEN_LANDING_KEY: &str = "has_seen_landing";

/// Top-level screen selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Onboarding landing page (first-run default)
    #[default]
    Landing,
    /// Installation guide
    Guide,
    /// Main tabbed application
    App,
}

/// Functional panel inside the main application view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Contacts,
    Communications,
    Projects,
    Analytics,
    Settings,
}

impl Tab {
    /// All panels in sidebar display order
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Dashboard,
            Tab::Contacts,
            Tab::Communications,
            Tab::Projects,
            Tab::Analytics,
            Tab::Settings,
        ]
    }

    /// Display name for the sidebar
    pub const fn name(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Contacts => "Contacts",
            Tab::Communications => "Communications",
            Tab::Projects => "Projects",
            Tab::Analytics => "Analytics",
            Tab::Settings => "Settings",
        }
    }

    /// Deep-link identifier (also the `--tab` value)
    pub const fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Contacts => "contacts",
            Tab::Communications => "communications",
            Tab::Projects => "projects",
            Tab::Analytics => "analytics",
            Tab::Settings => "settings",
        }
    }

    /// Keyboard shortcut for this panel
    pub const fn key(self) -> char {
        match self {
            Tab::Dashboard => 'd',
            Tab::Contacts => 'c',
            Tab::Communications => 'm',
            Tab::Projects => 'p',
            Tab::Analytics => 'a',
            Tab::Settings => 's',
        }
    }

    /// Parse a deep-link identifier. Unrecognized values yield `None`.
    pub fn parse(value: &str) -> Option<Tab> {
        Tab::all().iter().copied().find(|t| t.id() == value)
    }

    /// Next panel in the cycle
    pub fn next(self) -> Self {
        match self {
            Tab::Dashboard => Tab::Contacts,
            Tab::Contacts => Tab::Communications,
            Tab::Communications => Tab::Projects,
            Tab::Projects => Tab::Analytics,
            Tab::Analytics => Tab::Settings,
            Tab::Settings => Tab::Dashboard,
        }
    }

    /// Previous panel in the cycle
    pub fn prev(self) -> Self {
        match self {
            Tab::Dashboard => Tab::Settings,
            Tab::Contacts => Tab::Dashboard,
            Tab::Communications => Tab::Contacts,
            Tab::Projects => Tab::Communications,
            Tab::Analytics => Tab::Projects,
            Tab::Settings => Tab::Analytics,
        }
    }
}

/// Read-only snapshot of the launch request parameters
#[derive(Debug, Clone, Default)]
pub struct LaunchParams {
    /// Requested panel (`--tab`), unvalidated
    pub tab: Option<String>,
    /// Requested view (`--view`), recognized values: `guide`, `app`
    pub view: Option<String>,
}

/// Resolved initial view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Launch {
    pub view_mode: ViewMode,
    pub active_tab: Tab,
    /// Whether this resolution persisted the first-run flag
    pub flag_written: bool,
}

/// Resolve the initial view state from the three startup signals.
///
/// Rules are evaluated in order; later rules override earlier state:
/// 1. Returning user (flag set) or installed launch lands in the app.
/// 2. `view=guide` opens the installation guide.
/// 3. `view=app` opens the app and counts as passing the landing page.
/// 4. A valid `tab` deep link opens that panel directly, also passing the
///    landing page. Invalid tab values are silently ignored.
///
/// If no rule matches, the defaults stand: landing page, dashboard tab.
///
/// A failed flag write is logged and does not abort resolution; every other
/// input is treated permissively (absence is the common case, not an error).
pub fn resolve(store: &mut dyn StateStore, installed: bool, params: &LaunchParams) -> Launch {
    let mut view_mode = ViewMode::default();
    let mut active_tab = Tab::default();
    let mut pass_landing = false;

    // Rule 1: ambient signals
    let seen = store.get(HAS_SEEN_LANDING_KEY).as_deref() == Some("true");
    if seen || installed {
        view_mode = ViewMode::App;
    }

    // Rule 2: explicit guide request
    if params.view.as_deref() == Some("guide") {
        view_mode = ViewMode::Guide;
    }

    // Rule 3: explicit app request
    if params.view.as_deref() == Some("app") {
        view_mode = ViewMode::App;
        pass_landing = true;
    }

    // Rule 4: tab deep link wins over everything
    if let Some(tab) = params.tab.as_deref().and_then(Tab::parse) {
        active_tab = tab;
        view_mode = ViewMode::App;
        pass_landing = true;
    }

    let mut flag_written = false;
    if pass_landing {
        match store.set(HAS_SEEN_LANDING_KEY, "true") {
            Ok(()) => flag_written = true,
            Err(e) => warn!("Failed to persist first-run flag: {e:#}"),
        }
    }

    debug!(?view_mode, ?active_tab, flag_written, "resolved startup view");

    Launch {
        view_mode,
        active_tab,
        flag_written,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStateStore;
    use anyhow::anyhow;
    use rstest::rstest;
    use test_case::test_case;

    fn store_with_flag(flag: Option<&str>) -> MemoryStateStore {
        let mut store = MemoryStateStore::new();
        if let Some(value) = flag {
            store.set(HAS_SEEN_LANDING_KEY, value).unwrap();
        }
        store
    }

    fn params(tab: Option<&str>, view: Option<&str>) -> LaunchParams {
        LaunchParams {
            tab: tab.map(String::from),
            view: view.map(String::from),
        }
    }

    /// Independent restatement of the precedence rules, highest first.
    /// Used as the oracle for the exhaustive truth-table test below.
    fn expected(
        seen: bool,
        installed: bool,
        view: Option<&str>,
        tab: Option<&str>,
    ) -> (ViewMode, Tab, bool) {
        if let Some(t) = tab.and_then(Tab::parse) {
            return (ViewMode::App, t, true);
        }
        if view == Some("app") {
            return (ViewMode::App, Tab::Dashboard, true);
        }
        if view == Some("guide") {
            return (ViewMode::Guide, Tab::Dashboard, false);
        }
        if seen || installed {
            return (ViewMode::App, Tab::Dashboard, false);
        }
        (ViewMode::Landing, Tab::Dashboard, false)
    }

    #[test]
    fn truth_table_matches_precedence_cascade() {
        let flags = [None, Some("true")];
        let installed_values = [false, true];
        let views = [None, Some("guide"), Some("app")];
        let tabs = [
            None,
            Some("dashboard"),
            Some("contacts"),
            Some("communications"),
            Some("projects"),
            Some("analytics"),
            Some("settings"),
        ];

        for flag in flags {
            for installed in installed_values {
                for view in views {
                    for tab in tabs {
                        let mut store = store_with_flag(flag);
                        let launch = resolve(&mut store, installed, &params(tab, view));
                        let (want_view, want_tab, want_written) =
                            expected(flag == Some("true"), installed, view, tab);
                        assert_eq!(
                            (launch.view_mode, launch.active_tab, launch.flag_written),
                            (want_view, want_tab, want_written),
                            "flag={flag:?} installed={installed} view={view:?} tab={tab:?}"
                        );
                    }
                }
            }
        }
    }

    #[test_case(None, false, None, None => (ViewMode::Landing, Tab::Dashboard); "scenario A: all absent stays on landing")]
    #[test_case(Some("true"), false, None, None => (ViewMode::App, Tab::Dashboard); "scenario B: returning user enters app")]
    #[test_case(None, false, Some("guide"), None => (ViewMode::Guide, Tab::Dashboard); "scenario C: guide request")]
    #[test_case(None, false, Some("app"), None => (ViewMode::App, Tab::Dashboard); "scenario D: explicit app request")]
    #[test_case(None, false, None, Some("analytics") => (ViewMode::App, Tab::Analytics); "scenario E: tab deep link")]
    #[test_case(None, false, None, Some("bogus") => (ViewMode::Landing, Tab::Dashboard); "scenario F: bogus tab falls through")]
    #[test_case(None, true, None, None => (ViewMode::App, Tab::Dashboard); "installed launch enters app")]
    #[test_case(Some("true"), true, Some("guide"), None => (ViewMode::Guide, Tab::Dashboard); "guide overrides ambient signals")]
    #[test_case(None, false, Some("guide"), Some("projects") => (ViewMode::App, Tab::Projects); "tab deep link beats guide request")]
    fn scenarios(
        flag: Option<&str>,
        installed: bool,
        view: Option<&str>,
        tab: Option<&str>,
    ) -> (ViewMode, Tab) {
        let mut store = store_with_flag(flag);
        let launch = resolve(&mut store, installed, &params(tab, view));
        (launch.view_mode, launch.active_tab)
    }

    #[test]
    fn explicit_app_request_persists_flag() {
        let mut store = store_with_flag(None);
        let launch = resolve(&mut store, false, &params(None, Some("app")));
        assert!(launch.flag_written);
        assert_eq!(
            store.get(HAS_SEEN_LANDING_KEY).as_deref(),
            Some("true"),
            "flag must be durable after an explicit app request"
        );
    }

    #[test]
    fn tab_deep_link_persists_flag() {
        let mut store = store_with_flag(None);
        let launch = resolve(&mut store, false, &params(Some("contacts"), None));
        assert!(launch.flag_written);
        assert_eq!(store.get(HAS_SEEN_LANDING_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn bogus_tab_leaves_flag_unset() {
        let mut store = store_with_flag(None);
        let launch = resolve(&mut store, false, &params(Some("bogus"), None));
        assert!(!launch.flag_written);
        assert_eq!(store.get(HAS_SEEN_LANDING_KEY), None);
    }

    #[test]
    fn guide_request_leaves_flag_unset() {
        let mut store = store_with_flag(None);
        resolve(&mut store, false, &params(None, Some("guide")));
        assert_eq!(store.get(HAS_SEEN_LANDING_KEY), None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut store = store_with_flag(None);
        let p = params(Some("analytics"), Some("guide"));
        let first = resolve(&mut store, false, &p);
        let second = resolve(&mut store, false, &p);
        assert_eq!(first.view_mode, second.view_mode);
        assert_eq!(first.active_tab, second.active_tab);
    }

    /// Store whose writes always fail, for exercising the permissive path
    struct FailingStore;

    impl StateStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    #[test]
    fn persist_failure_does_not_abort_resolution() {
        let mut store = FailingStore;
        let launch = resolve(&mut store, false, &params(Some("projects"), None));
        assert_eq!(launch.view_mode, ViewMode::App);
        assert_eq!(launch.active_tab, Tab::Projects);
        assert!(!launch.flag_written);
    }

    #[rstest]
    #[case("dashboard", Some(Tab::Dashboard))]
    #[case("contacts", Some(Tab::Contacts))]
    #[case("communications", Some(Tab::Communications))]
    #[case("projects", Some(Tab::Projects))]
    #[case("analytics", Some(Tab::Analytics))]
    #[case("settings", Some(Tab::Settings))]
    #[case("Dashboard", None)]
    #[case("", None)]
    #[case("invoices", None)]
    fn tab_parse(#[case] input: &str, #[case] want: Option<Tab>) {
        assert_eq!(Tab::parse(input), want);
    }

    #[test]
    fn tab_cycle_is_closed() {
        for &tab in Tab::all() {
            assert_eq!(tab.next().prev(), tab);
            assert_eq!(tab.prev().next(), tab);
        }
    }
}
