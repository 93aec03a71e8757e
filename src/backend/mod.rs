// ABOUTME: Release backend contract and implementations.
// ABOUTME: Defines the ReleaseBackend trait, error types, and the HTTP client.

mod deployer;
mod error;
mod http;
mod release;

pub use deployer::Deployer;
pub use error::{BackendError, BackendErrorKind};
pub use http::HttpReleaseBackend;
pub use release::{AppStates, ReleaseBackend};
