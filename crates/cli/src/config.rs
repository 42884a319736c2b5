// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use normalize_eol_engine::config::{NormalizeConfig, NormalizeConfigBuilder};

impl TryFrom<Args> for NormalizeConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        NormalizeConfigBuilder::default()
            .root(args.root)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
