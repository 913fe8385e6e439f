//! Logging support for the patch binaries.
//!
//! Events go to stderr; stdout stays reserved for the patch diagnostics.
//! Verbosity defaults to warnings; RUST_LOG overrides.

use std::io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

/// Install the stderr subscriber shared by the three patch binaries.
///
/// Safe to call more than once; a subscriber installed earlier (tests)
/// stays in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quotefix=warn"));

    let subscriber = registry().with(
        fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(false)
            .with_target(false),
    );

    let _ = tracing::subscriber::set_global_default(subscriber.with(filter));
}
