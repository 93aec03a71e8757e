// ABOUTME: Error taxonomy for orchestrator operations.
// ABOUTME: Stable kinds let a binding layer pick response codes without parsing messages.

use crate::backend::BackendError;
use crate::stream::StoreError;
use crate::types::ReleaseVersionError;
use thiserror::Error;

/// Errors surfaced by orchestrator operations.
///
/// Backend and store failures are propagated with their originating cause
/// preserved; nothing is retried or swallowed at this layer.
#[derive(Debug, Error)]
pub enum OrchestrateError {
    /// No stream definition matches the referenced name.
    #[error("no stream definition named '{0}'")]
    NotFound(String),

    /// An update request's release name does not match the addressed stream.
    #[error("release name '{actual}' does not match stream '{expected}'")]
    ReleaseNameMismatch { expected: String, actual: String },

    /// A version argument failed validation before any backend call.
    #[error("invalid release version: {0}")]
    InvalidVersion(#[from] ReleaseVersionError),

    /// The definition store could not be read.
    #[error("definition store failure: {0}")]
    Store(#[from] StoreError),

    /// The release backend rejected or could not complete the operation.
    #[error("release backend failure: {0}")]
    Backend(#[from] BackendError),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestrateErrorKind {
    /// Unknown stream name.
    NotFound,
    /// Malformed input rejected before any side effect.
    Validation,
    /// Definition store failure.
    Store,
    /// Release backend failure.
    Backend,
}

impl OrchestrateError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> OrchestrateErrorKind {
        match self {
            OrchestrateError::NotFound(_) => OrchestrateErrorKind::NotFound,
            OrchestrateError::ReleaseNameMismatch { .. } | OrchestrateError::InvalidVersion(_) => {
                OrchestrateErrorKind::Validation
            }
            OrchestrateError::Store(_) => OrchestrateErrorKind::Store,
            OrchestrateError::Backend(_) => OrchestrateErrorKind::Backend,
        }
    }
}
