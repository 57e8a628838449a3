//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Emits JSON lines by default; set `ROLLCALL_LOG_FORMAT=pretty` for
/// human-readable output during local development. Filtering is controlled
/// by `RUST_LOG` (default `info`). Safe to call multiple times (subsequent
/// calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let pretty = std::env::var("ROLLCALL_LOG_FORMAT").is_ok_and(|v| v == "pretty");
    if pretty {
        let _ = builder.pretty().try_init();
    } else {
        let _ = builder.json().try_init();
    }
}
