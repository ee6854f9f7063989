//! Panel rendering modules
//!
//! Six self-contained panels shown one at a time inside the app view. None
//! of them takes input from or returns state to the view controller.

pub mod analytics;
pub mod communications;
pub mod contacts;
pub mod dashboard;
pub mod projects;
pub mod settings;

pub(crate) use analytics::render_analytics;
pub(crate) use communications::render_communications;
pub(crate) use contacts::render_contacts;
pub(crate) use dashboard::render_dashboard;
pub(crate) use projects::render_projects;
pub(crate) use settings::render_settings;
