//! Structured logging to stderr
//!
//! Filter priority: `PGPROBE_LOG`, then `RUST_LOG`, then the `-v` count.
//! stdout stays reserved for the probe report.

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PGPROBE_LOG";

/// Map the number of `-v` flags to a level
#[must_use]
pub const fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            let level = level_from_verbosity(verbosity).as_str().to_lowercase();
            // sqlx logs every statement at info
            EnvFilter::new(format!("{}={level},sqlx=warn", env!("CARGO_CRATE_NAME")))
        })
}

/// Install the global subscriber
///
/// A second call (for example from tests) leaves the first subscriber in
/// place.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
