// crates/cli/src/presentation.rs
use normalize_eol_engine::RunSummary;
use normalize_eol_engine::progress::ProgressSink;
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::Path;

/// Prints `Converting <path>` per file and `Done!!!` at the end.
pub struct ConsolePresenter<W: Write> {
    out: RefCell<W>,
}

impl ConsolePresenter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ProgressSink for ConsolePresenter<W> {
    fn on_file(&self, relative: &Path) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "Converting {}", relative.display())?;
        // Announcement must be visible before the file is touched.
        out.flush()
    }

    fn on_complete(&self, _summary: &RunSummary) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "Done!!!")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_lines() {
        let presenter = ConsolePresenter::new(Vec::new());
        presenter.on_file(Path::new("src/Program.cs")).unwrap();
        presenter.on_file(Path::new("App.sln")).unwrap();
        presenter
            .on_complete(&RunSummary {
                converted: 2,
                changed: 1,
            })
            .unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(
            text,
            "Converting src/Program.cs\nConverting App.sln\nDone!!!\n"
        );
    }
}
