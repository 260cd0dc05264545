//! Diagnostic logging.
//!
//! User-facing output goes through the `info!`/`success!`/`warning!`/`error!`
//! macros; `tracing` carries request and transition diagnostics to stderr so
//! they never mix with command output.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber.
///
/// `RUST_LOG` decides the filter; `verbose` forces debug output for this crate.
/// Without either only warnings are shown.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("givemeasong=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // a subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
