//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "task_detail=info";

/// Installs a global `fmt` subscriber writing to stderr.
///
/// The filter is read from `RUST_LOG`; `verbose` raises the crate's own level
/// to `debug`. Calling this twice is harmless: the second installation is
/// ignored.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "task_detail=debug"
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
