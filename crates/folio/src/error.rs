//! CLI error types.

use folio_config::ConfigError;
use folio_layout::{BuildError, LayoutError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Layout(#[from] LayoutError),

    #[error("{0}")]
    Build(#[from] BuildError),
}
