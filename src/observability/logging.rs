//! Diagnostic logging for `copilot-docgen`.
//!
//! One plain-text `tracing` subscriber on stderr, so stdout only ever
//! carries the confirmation line. The level comes from `-v` unless
//! `COPILOT_DOCGEN_LOG_LEVEL` holds a filter directive.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the `-v` level.
pub const LOG_LEVEL_ENV: &str = "COPILOT_DOCGEN_LOG_LEVEL";

/// Filter directive for a `-v` count; saturates at `trace`.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the level filter, preferring `COPILOT_DOCGEN_LOG_LEVEL`.
fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Installs the stderr subscriber. Not called under `--quiet`.
///
/// A run is a single short transform, so timestamps are left out; module
/// targets appear from `-vv` on.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .without_time()
        .with_target(verbosity >= 2)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
