use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize process-wide tracing: `RUST_LOG` filter (default `info`),
/// compact output. Called by binaries and tests, never by the library;
/// repeated calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}
