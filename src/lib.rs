//! `BizDesk` - Terminal business management workspace
//!
//! A single-binary TUI for small-business management: contacts, projects,
//! communications, and analytics behind a tabbed interface, with an
//! onboarding landing page and an installation guide for first-time users.
//!
//! # Features
//! - Onboarding flow: landing page shown on first run only
//! - Deep links: `--tab` and `--view` flags jump straight into a panel
//! - Standalone detection: skips onboarding when launched via desktop entry
//! - Durable first-run state under the XDG data directory

pub mod cli;
pub mod commands;
pub mod host;
pub mod launch;
pub mod state;
pub mod style;
pub mod tui;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types for convenience
pub use cli::Args;
pub use launch::{Launch, LaunchParams, Tab, ViewMode};
pub use state::{FileStateStore, StateStore};

/// Version string shown in the TUI header and CLI output
#[must_use]
pub fn version_string() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}
