//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise this crate logs at `info`, or `debug`
/// with `verbose`. Diagnostics go to stderr so stdout carries only results.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "mls_data=debug" } else { "mls_data=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
