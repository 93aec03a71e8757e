// ABOUTME: Deployment orchestration core.
// ABOUTME: Exports the orchestrator and its error taxonomy.

mod error;
mod orchestrator;

pub use error::{OrchestrateError, OrchestrateErrorKind};
pub use orchestrator::StreamOrchestrator;
