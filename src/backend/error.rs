// ABOUTME: Release backend error types with SNAFU pattern.
// ABOUTME: Keeps a stable error kind so callers can branch without parsing messages.

use snafu::Snafu;

/// Errors from release backend operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum BackendError {
    #[snafu(display("no release found for stream '{name}'"))]
    ReleaseNotFound { name: String },

    #[snafu(display("backend rejected request with status {status}: {message}"))]
    Response { status: u16, message: String },

    #[snafu(display("backend transport failure: {message}"))]
    Transport { message: String },

    #[snafu(display("backend request timed out after {seconds}s"))]
    Timeout { seconds: u64 },

    #[snafu(display("failed to decode backend response: {source}"))]
    Decode { source: serde_json::Error },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// The backend has no release for the referenced stream.
    NotFound,
    /// The backend answered with a non-success status.
    Rejected,
    /// The backend could not be reached or the connection broke.
    Transport,
    /// The backend answered with a body this client could not decode.
    Decode,
}

impl BackendError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> BackendErrorKind {
        match self {
            BackendError::ReleaseNotFound { .. } => BackendErrorKind::NotFound,
            BackendError::Response { .. } => BackendErrorKind::Rejected,
            BackendError::Transport { .. } | BackendError::Timeout { .. } => {
                BackendErrorKind::Transport
            }
            BackendError::Decode { .. } => BackendErrorKind::Decode,
        }
    }
}
