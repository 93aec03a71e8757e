// ABOUTME: Release backend capability trait.
// ABOUTME: Materializes, updates, and reports on running releases; source of truth for history.

use super::deployer::Deployer;
use super::error::BackendError;
use crate::release::{ReleaseRecord, UpdateRequest};
use crate::stream::{DefinitionId, DeploymentState, StreamDefinition, StreamDeployment};
use crate::types::{ReleaseVersion, StreamName};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

/// Per-application deployment states for one stream, keyed by app name.
pub type AppStates = BTreeMap<String, DeploymentState>;

/// The release backend the orchestrator delegates to.
///
/// Provisioning triggered by deploy/update/rollback is asynchronous on the
/// backend side; these calls return on acceptance, not completion. Retries,
/// timeouts, and optimistic version checks live behind this trait, never in
/// front of it.
#[async_trait]
pub trait ReleaseBackend: Send + Sync {
    /// Deploy a stream with the given flat deployment properties.
    async fn deploy_stream(
        &self,
        name: &StreamName,
        properties: &BTreeMap<String, String>,
    ) -> Result<(), BackendError>;

    /// Transition a stream's release per the update request.
    async fn update_stream(
        &self,
        name: &StreamName,
        request: &UpdateRequest,
    ) -> Result<(), BackendError>;

    /// Restore the property set recorded for a prior release version.
    async fn rollback_stream(
        &self,
        name: &StreamName,
        version: ReleaseVersion,
    ) -> Result<(), BackendError>;

    /// Rendered deployment manifest for a release version.
    async fn manifest(
        &self,
        name: &StreamName,
        version: ReleaseVersion,
    ) -> Result<String, BackendError>;

    /// Release records for a name, ordered newest to oldest.
    async fn history(&self, name: &StreamName) -> Result<Vec<ReleaseRecord>, BackendError>;

    /// Configured target platforms.
    async fn platform_list(&self) -> Result<Vec<Deployer>, BackendError>;

    /// Deployment snapshot for a stream, absent when never deployed.
    async fn info(&self, name: &StreamName) -> Result<Option<StreamDeployment>, BackendError>;

    /// Batch per-app state query over a set of definitions.
    ///
    /// Keyed by definition identity rather than name so a redefined stream
    /// does not inherit its predecessor's state. One round trip regardless
    /// of set size.
    async fn state(
        &self,
        definitions: &[StreamDefinition],
    ) -> Result<HashMap<DefinitionId, AppStates>, BackendError>;
}
