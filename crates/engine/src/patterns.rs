// crates/engine/src/patterns.rs
use crate::error::Result;
use globset::{Glob, GlobBuilder, GlobMatcher};

/// Files rewritten by default, evaluated in this order from the repository root.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "**/.editorconfig",
    "**/*.sln",
    "**/*.cs",
    "**/*.csproj",
    "**/appsettings*.json",
];

/// A compiled glob that remembers its source text.
#[derive(Debug, Clone)]
pub struct Pattern {
    glob: Glob,
    matcher: GlobMatcher,
}

impl Pattern {
    /// Compile a pattern. `*` and `?` never match across `/`.
    ///
    /// # Errors
    /// Returns `EngineError::Pattern` if the glob is malformed.
    pub fn new(pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern).literal_separator(true).build()?;
        let matcher = glob.compile_matcher();
        Ok(Self { glob, matcher })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.glob.glob()
    }

    /// Match against a root-relative path using `/` separators.
    #[must_use]
    pub fn is_match(&self, relative: &str) -> bool {
        self.matcher.is_match(relative)
    }
}

/// Compile every pattern, keeping declaration order.
///
/// # Errors
/// Fails on the first malformed pattern.
pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Pattern>> {
    patterns.iter().map(|p| Pattern::new(p.as_ref())).collect()
}
