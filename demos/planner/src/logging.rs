//! Logging setup for the planner.

use tracing_subscriber::{EnvFilter, fmt};

/// Install a `fmt` subscriber filtered by `LIFT_LOG` (default `warn`, so
/// the interactive prompts are not drowned in events).
///
/// Events go to stderr; the report goes to stdout.
pub fn init() {
    let filter = EnvFilter::try_from_env("LIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
