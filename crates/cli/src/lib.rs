// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::config::NormalizeConfig;
use crate::error::Result;
use crate::presentation::ConsolePresenter;
use normalize_eol_engine::RunSummary;

/// Convert every matched file under the configured root, reporting to stdout.
///
/// # Errors
/// Returns the first error hit; nothing after it is converted.
pub fn run(config: &NormalizeConfig) -> Result<RunSummary> {
    let presenter = ConsolePresenter::stdout();
    Ok(normalize_eol_engine::run(config, &presenter)?)
}
