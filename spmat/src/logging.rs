//! Tracing setup for the `spmat` binary

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber, logging to stderr
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// everything down to `debug` when `verbose` is set. Calling this more than
/// once is harmless.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
