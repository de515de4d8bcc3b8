//! CLI error types.

use lms_catalog::CatalogError;
use lms_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
