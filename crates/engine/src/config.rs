// crates/engine/src/config.rs
use crate::patterns::DEFAULT_PATTERNS;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct NormalizeConfig {
    /// Directory every pattern is evaluated against.
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "default_patterns()")]
    pub patterns: Vec<String>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: default_patterns(),
            follow_links: false,
        }
    }
}

fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| (*p).to_string()).collect()
}
