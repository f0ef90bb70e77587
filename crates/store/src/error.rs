use rewear_core::error::CoreError;

/// Errors raised while loading or mutating the catalog.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error from `rewear_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record that parsed but violates a catalog invariant.
    #[error("Invalid catalog record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
