// crates/engine/src/progress.rs
use crate::RunSummary;
use std::io;
use std::path::Path;

/// Receives run events in order: one `on_file` before each conversion, then
/// `on_complete` once every file has been converted.
pub trait ProgressSink {
    fn on_file(&self, relative: &Path) -> io::Result<()>;
    fn on_complete(&self, summary: &RunSummary) -> io::Result<()>;
}

/// Sink for callers that only want the summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_file(&self, _relative: &Path) -> io::Result<()> {
        Ok(())
    }

    fn on_complete(&self, _summary: &RunSummary) -> io::Result<()> {
        Ok(())
    }
}
