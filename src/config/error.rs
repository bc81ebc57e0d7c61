//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("package manifest parsing error in `{0}`")]
    Manifest(PathBuf, #[source] serde_json::Error),

    #[error("no package.json with a `name` field found at or above `{0}`")]
    MissingPackage(PathBuf),
}
