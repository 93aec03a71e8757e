// ABOUTME: The deployment orchestrator: single entry point for stream lifecycle operations.
// ABOUTME: Owns policy only; state lives in the definition store and release backend.

use super::error::OrchestrateError;
use crate::backend::{Deployer, ReleaseBackend};
use crate::release::{ReleaseRecord, UpdateRequest};
use crate::stream::{
    DefinitionStore, DeploymentState, StreamDefinition, StreamDeploymentResource, aggregate,
};
use crate::types::{ReleaseVersion, StreamName};
use std::collections::BTreeMap;

/// Stateless, request-scoped orchestrator over a definition store and a
/// release backend.
///
/// Concurrent operations against the same stream are not serialized here;
/// last-writer-wins is whatever consistency the backend provides, so no
/// method may assume exclusive access.
#[derive(Debug)]
pub struct StreamOrchestrator<S, B> {
    store: S,
    backend: B,
}

impl<S, B> StreamOrchestrator<S, B>
where
    S: DefinitionStore,
    B: ReleaseBackend,
{
    pub fn new(store: S, backend: B) -> Self {
        Self { store, backend }
    }

    async fn resolve(&self, name: &StreamName) -> Result<StreamDefinition, OrchestrateError> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| OrchestrateError::NotFound(name.to_string()))
    }

    /// Deploy a defined stream with the given deployment properties.
    ///
    /// Properties are delegated verbatim; interpretation is the backend's
    /// responsibility. Returns on acceptance, not provisioning completion.
    pub async fn deploy(
        &self,
        name: &StreamName,
        properties: &BTreeMap<String, String>,
    ) -> Result<(), OrchestrateError> {
        self.resolve(name).await?;
        tracing::debug!("deploying stream {} ({} properties)", name, properties.len());
        self.backend.deploy_stream(name, properties).await?;
        Ok(())
    }

    /// Transition a stream to a new release per the update request.
    ///
    /// A release name that does not match the addressed stream fails
    /// validation before any backend call. The request itself is forwarded
    /// unmodified.
    pub async fn update(
        &self,
        name: &StreamName,
        request: &UpdateRequest,
    ) -> Result<(), OrchestrateError> {
        if request.release_name() != name.as_str() {
            return Err(OrchestrateError::ReleaseNameMismatch {
                expected: name.to_string(),
                actual: request.release_name().to_string(),
            });
        }
        self.resolve(name).await?;
        tracing::debug!("updating stream {}", name);
        self.backend.update_stream(name, request).await?;
        Ok(())
    }

    /// Roll a stream back to a prior release version.
    ///
    /// Non-positive versions fail validation before any backend call.
    pub async fn rollback(&self, name: &StreamName, version: i32) -> Result<(), OrchestrateError> {
        let version = ReleaseVersion::new(version)?;
        self.resolve(name).await?;
        tracing::debug!("rolling back stream {} to version {}", name, version);
        self.backend.rollback_stream(name, version).await?;
        Ok(())
    }

    /// Rendered deployment manifest for a release version. Read-only.
    pub async fn manifest(
        &self,
        name: &StreamName,
        version: i32,
    ) -> Result<String, OrchestrateError> {
        let version = ReleaseVersion::new(version)?;
        self.resolve(name).await?;
        Ok(self.backend.manifest(name, version).await?)
    }

    /// Release history for a stream, newest first. Read-only.
    pub async fn history(
        &self,
        name: &StreamName,
    ) -> Result<Vec<ReleaseRecord>, OrchestrateError> {
        self.resolve(name).await?;
        Ok(self.backend.history(name).await?)
    }

    /// Configured target platforms, exactly as the backend reports them.
    pub async fn platform_list(&self) -> Result<Vec<Deployer>, OrchestrateError> {
        Ok(self.backend.platform_list().await?)
    }

    /// Aggregated deployment info for one stream.
    ///
    /// Resolves the definition first (an unknown name fails here without
    /// touching the backend), then fetches the deployment snapshot and the
    /// batch state in one concurrent round trip each. A stream that was
    /// defined but never deployed yields empty properties and `unknown`.
    pub async fn info(
        &self,
        name: &StreamName,
    ) -> Result<StreamDeploymentResource, OrchestrateError> {
        let definition = self.resolve(name).await?;

        let (snapshot, states) = futures::try_join!(
            self.backend.info(name),
            self.backend.state(std::slice::from_ref(&definition)),
        )?;

        let deployment_properties = snapshot
            .map(|d| d.deployment_properties)
            .unwrap_or_else(|| "{}".to_string());

        // Keyed by definition identity, not name: a redefined stream that
        // was never redeployed has no entry and reads as unknown.
        let status = match states.get(&definition.id()) {
            Some(app_states) => aggregate(app_states.values().copied()),
            None => DeploymentState::Unknown,
        };

        Ok(StreamDeploymentResource {
            stream_name: definition.name,
            dsl_text: definition.dsl_text,
            deployment_properties,
            status: status.as_str().to_string(),
        })
    }
}
