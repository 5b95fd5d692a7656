use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or parsing a flow export
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse flow JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: std::io::Error,
    },
}
