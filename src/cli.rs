//! Command-line interface definitions
//!
//! Uses clap for argument parsing with derive macros. The top-level `--tab`
//! and `--view` flags are the deep-link parameters consumed by startup
//! resolution; subcommands are one-shot diagnostics.

use clap::{Parser, Subcommand};

/// BizDesk - Terminal business management workspace
#[derive(Parser)]
#[command(name = "bizdesk")]
#[command(version)]
#[command(about = "BizDesk - Terminal business management workspace")]
#[command(after_help = "\
BEHAVIOR:
  - First launch shows the onboarding landing page
  - Once you proceed past it (or launch via the desktop entry), bizdesk
    opens straight into the tabbed application
  - --tab and --view act as deep links and skip onboarding

DEEP LINKS:
  bizdesk --tab contacts        Open directly on the Contacts panel
  bizdesk --view guide          Open the installation guide
  bizdesk --view app            Skip the landing page this and every launch

DIAGNOSTICS:
  bizdesk resolve               Show which view a launch would open
  bizdesk state-path            Print the state file location

STANDALONE MODE:
  The desktop-entry launcher sets BIZDESK_STANDALONE=1; bizdesk then skips
  onboarding, matching an installed-app launch.")]
pub struct Args {
    /// Open directly on this panel (dashboard, contacts, communications,
    /// projects, analytics, settings)
    #[arg(long, value_name = "TAB", global = true)]
    pub tab: Option<String>,

    /// Open a specific view (guide, app)
    #[arg(long, value_name = "VIEW", global = true)]
    pub view: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Run startup resolution and print the outcome without opening the TUI
    Resolve {
        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Do not persist the first-run flag
        #[arg(long)]
        dry_run: bool,

        /// Force the installed/standalone signal on
        #[arg(long)]
        installed: bool,
    },

    /// Print the state file location
    StatePath,
}
