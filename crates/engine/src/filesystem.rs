// crates/engine/src/filesystem.rs
use crate::error::{EngineError, Result};
use crate::patterns::{self, Pattern};
use ignore::{DirEntry, WalkBuilder};
use std::path::{Component, Path, PathBuf};

/// A file matched by one of the configured patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Source text of the pattern that matched.
    pub pattern: String,
    /// Path used for I/O (root joined with `relative`).
    pub path: PathBuf,
    /// Root-relative path with `/` separators.
    pub relative: String,
}

/// Expand `patterns` against `root`, one pattern at a time.
///
/// The tree is walked once, serially, and sorted by file name. Files matching
/// several patterns are returned once per matching pattern.
///
/// # Errors
/// Returns an error if `root` is not a directory, a pattern does not compile,
/// or the traversal fails.
pub fn select_files<S: AsRef<str>>(
    root: &Path,
    patterns: &[S],
    follow_links: bool,
) -> Result<Vec<SelectedFile>> {
    if !root.is_dir() {
        return Err(EngineError::Config(format!(
            "Root is not a directory: {}",
            root.display()
        )));
    }

    let compiled = patterns::compile(patterns)?;
    let candidates = walk_files(root, follow_links)?;
    log::debug!(
        "walked {} files under {}",
        candidates.len(),
        root.display()
    );

    Ok(expand(&compiled, &candidates))
}

fn expand(patterns: &[Pattern], candidates: &[(PathBuf, String)]) -> Vec<SelectedFile> {
    let mut selected = Vec::new();
    for pattern in patterns {
        let before = selected.len();
        selected.extend(
            candidates
                .iter()
                .filter(|(_, relative)| pattern.is_match(relative))
                .map(|(path, relative)| SelectedFile {
                    pattern: pattern.as_str().to_string(),
                    path: path.clone(),
                    relative: relative.clone(),
                }),
        );
        log::debug!(
            "pattern {} matched {} files",
            pattern.as_str(),
            selected.len() - before
        );
    }
    selected
}

/// Every regular file under `root`, including hidden and git-ignored files.
/// Hidden directories below the root (`.git`, `.vs`, ...) are not entered.
fn walk_files(root: &Path, follow_links: bool) -> Result<Vec<(PathBuf, String)>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(follow_links)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden_dir(entry));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let relative = relative_display(root, &path);
        files.push((path, relative));
    }
    Ok(files)
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
        && entry.file_name().as_encoded_bytes().starts_with(b".")
}

/// Render `path` relative to `root`, joined with `/` regardless of platform.
#[must_use]
pub fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
