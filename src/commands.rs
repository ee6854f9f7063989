//! One-shot CLI commands
//!
//! Diagnostics that run outside the TUI: `resolve` replays startup
//! resolution and prints the outcome, `state-path` shows where the durable
//! state lives.

use anyhow::Result;

use crate::launch::{self, LaunchParams, ViewMode, HAS_SEEN_LANDING_KEY};
use crate::state::{FileStateStore, MemoryStateStore, StateStore};
use crate::style::BizStyle;

/// Run startup resolution and print the resolved view state.
///
/// With `dry_run`, the resolution runs against an in-memory copy of the
/// current state so rules 3/4 never touch the state file.
///
/// # Errors
/// Returns an error if the state file location cannot be determined or JSON
/// serialization fails.
pub fn resolve(params: &LaunchParams, installed: bool, json: bool, dry_run: bool) -> Result<()> {
    let mut file_store = FileStateStore::open()?;

    let launch = if dry_run {
        let mut scratch = MemoryStateStore::new();
        if let Some(value) = file_store.get(HAS_SEEN_LANDING_KEY) {
            // MemoryStateStore::set is infallible
            let _ = scratch.set(HAS_SEEN_LANDING_KEY, &value);
        }
        launch::resolve(&mut scratch, installed, params)
    } else {
        launch::resolve(&mut file_store, installed, params)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&launch)?);
        return Ok(());
    }

    println!("{}", "Startup resolution".header());
    let view = match launch.view_mode {
        ViewMode::Landing => "landing",
        ViewMode::Guide => "guide",
        ViewMode::App => "app",
    };
    println!("  view:  {}", view.technical());
    println!("  tab:   {}", launch.active_tab.id().technical());
    if launch.flag_written {
        if dry_run {
            println!("  flag:  {}", "would be persisted (dry run)".warning());
        } else {
            println!("  flag:  {}", "persisted".success());
        }
    } else {
        println!("  flag:  unchanged");
    }

    Ok(())
}

/// Print the state file location
///
/// # Errors
/// Returns an error if the data directory cannot be determined or created.
pub fn state_path() -> Result<()> {
    println!("{}", FileStateStore::state_path()?.display());
    Ok(())
}
