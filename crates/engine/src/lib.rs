// crates/engine/src/lib.rs
use std::path::Path;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod patterns;
pub mod processor;
pub mod progress;

use crate::config::NormalizeConfig;
use crate::error::{EngineError, Result};
use crate::progress::ProgressSink;

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files rewritten, counting a file once per matching pattern.
    pub converted: usize,
    /// Rewritten files whose bytes actually differ from before.
    pub changed: usize,
}

/// Select files under `config.root` and convert them one by one.
///
/// Each file is announced through `sink` before it is read. The first error
/// stops the run: files converted before it stay converted and later files are
/// left as they were.
///
/// # Errors
///
/// Returns the first selection, read, decode, write or reporting error.
pub fn run(config: &NormalizeConfig, sink: &dyn ProgressSink) -> Result<RunSummary> {
    let files = filesystem::select_files(&config.root, &config.patterns, config.follow_links)?;
    if files.is_empty() {
        log::warn!("no files matched under {}", config.root.display());
    }

    let mut summary = RunSummary::default();
    for file in &files {
        sink.on_file(Path::new(&file.relative)).map_err(EngineError::Report)?;
        let outcome = processor::convert_file(&file.path)?;
        summary.converted += 1;
        if outcome.changed {
            summary.changed += 1;
        }
    }

    log::info!(
        "converted {} files ({} changed)",
        summary.converted,
        summary.changed
    );
    sink.on_complete(&summary).map_err(EngineError::Report)?;
    Ok(summary)
}
