// ABOUTME: Application-wide error types for rill.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::orchestrate::OrchestrateError;
use crate::types::StreamNameError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid stream name: {0}")]
    StreamName(#[from] StreamNameError),

    #[error(transparent)]
    Orchestrate(#[from] OrchestrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
