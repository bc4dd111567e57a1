//! `tracing` subscriber set-up for the binary.

use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Maps the verbosity flags onto a default filter directive.
#[must_use]
pub const fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity.verbose {
        0 if verbosity.is_quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags when it is set.
///
/// # Errors
///
/// Fails when a global subscriber has already been installed.
pub fn init(verbosity: Verbosity) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity.verbose >= 2)
        .try_init()
}
