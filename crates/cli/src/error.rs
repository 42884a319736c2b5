// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] normalize_eol_engine::error::EngineError),

    #[error("Failed to initialize logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
