//! Host environment queries
//!
//! The standalone signal mirrors a PWA's `display-mode: standalone` media
//! query: the shipped desktop-entry launcher sets `BIZDESK_STANDALONE=1`, so
//! a launch through it reads as an installed app while a plain shell
//! invocation does not. Evaluated once at startup and passed into the
//! resolver as a plain bool so tests can inject either value.

use std::env;

/// Environment variable set by the desktop-entry launcher
pub const STANDALONE_ENV: &str = "BIZDESK_STANDALONE";

/// Whether this process was launched as an installed/standalone app
#[must_use]
pub fn standalone_mode() -> bool {
    env::var(STANDALONE_ENV)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_values_recognized() {
        for v in ["1", "true", "yes", " TRUE "] {
            env::set_var(STANDALONE_ENV, v);
            assert!(standalone_mode(), "{v:?} should read as standalone");
        }
        for v in ["0", "false", "no", ""] {
            env::set_var(STANDALONE_ENV, v);
            assert!(!standalone_mode(), "{v:?} should not read as standalone");
        }
        env::remove_var(STANDALONE_ENV);
        assert!(!standalone_mode());
    }
}
