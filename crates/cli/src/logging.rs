// crates/cli/src/logging.rs
use crate::error::{AppError, Result};
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins over `-v` when set.
///
/// Engine records go through the `log` facade and are bridged by the
/// subscriber's `tracing-log` integration.
///
/// # Errors
/// Fails if a global subscriber or logger is already installed.
pub fn init(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(AppError::Logging)
}
