//! Process-wide `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GLOWVIEW_LOG";

/// Writes to stderr so command output stays machine-readable.
/// `GLOWVIEW_LOG` wins over `verbose`. Safe to call more than once.
pub fn init(verbose: bool) {
    let fallback = if verbose { "glowview=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
