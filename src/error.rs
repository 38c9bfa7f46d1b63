// src/error.rs
//! Error type for optimizer, persistence and print assembly operations.

use quire_types::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("Layout config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{0}' does not contain a 'config' object")]
    MissingConfig(PathBuf),

    #[error("No embeddable font found in '{0}'")]
    FontNotFound(PathBuf),

    #[error("Markup rendering failed: {0}")]
    Render(String),
}

impl OptimizerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OptimizerError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        OptimizerError::Json {
            path: path.into(),
            source,
        }
    }
}
