//! BizDesk binary entry point
//!
//! Resolves the startup view from the durable first-run flag, the
//! standalone signal, and any deep-link flags, then either runs the TUI or
//! dispatches to a one-shot diagnostic subcommand.

use anyhow::Result;
use clap::Parser;

use bizdesk::cli::{Args, Command};
use bizdesk::state::FileStateStore;
use bizdesk::{commands, host, launch};

/// Initialize logging
///
/// - For CLI commands: log to stderr via `tracing_subscriber`.
/// - For TUI mode: the terminal belongs to the UI, so logs go to a file in
///   the data directory. The returned guard must stay alive for the
///   non-blocking writer to flush.
fn init_logging(tui_mode: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if tui_mode {
        // No data dir means no log file; the TUI still runs
        let Ok(dir) = FileStateStore::data_dir() else {
            return None;
        };
        let appender = tracing_appender::rolling::never(dir, "bizdesk.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
        None
    }
}

fn main() -> Result<()> {
    // Install color-eyre for panic handling
    color_eyre::install().expect("Failed to install color_eyre");

    let args = Args::parse();
    let params = launch::LaunchParams {
        tab: args.tab,
        view: args.view,
    };

    match args.command {
        Some(Command::Resolve {
            json,
            dry_run,
            installed,
        }) => {
            let _guard = init_logging(false);
            commands::resolve(&params, installed || host::standalone_mode(), json, dry_run)
        }

        Some(Command::StatePath) => {
            let _guard = init_logging(false);
            commands::state_path()
        }

        // No subcommand: resolve the startup view and run the TUI
        None => {
            let _guard = init_logging(true);
            let mut store = FileStateStore::open()?;
            let standalone = host::standalone_mode();
            let resolved = launch::resolve(&mut store, standalone, &params);
            tracing::info!(
                view_mode = ?resolved.view_mode,
                active_tab = ?resolved.active_tab,
                standalone,
                "starting TUI"
            );
            bizdesk::tui::run(resolved, Box::new(store), standalone)
        }
    }
}
