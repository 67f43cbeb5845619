//! CLI error types.

use docb_config::ConfigError;
use docb_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("build failed: {0}")]
    Build(#[from] BuildError),

    #[error("unable to create example document: {0}")]
    ExampleDoc(String),
}
