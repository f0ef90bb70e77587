use rewear_core::error::CoreError;
use rewear_store::StoreError;

/// Top-level error for the `rewear` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A domain-level error from `rewear_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catalog loading or mutation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
