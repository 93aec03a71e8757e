// ABOUTME: Shared test helpers: a scripted mock release backend and store builders.
// ABOUTME: The mock records every call so tests can assert verbatim forwarding.

use async_trait::async_trait;
use parking_lot::Mutex;
use rill::backend::{AppStates, BackendError, Deployer, ReleaseBackend};
use rill::release::{ReleaseRecord, UpdateRequest};
use rill::stream::{
    DefinitionId, InMemoryDefinitionStore, StreamDefinition, StreamDeployment,
};
use rill::types::{ReleaseVersion, StreamName};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// One recorded backend invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Deploy {
        name: String,
        properties: BTreeMap<String, String>,
    },
    Update {
        name: String,
        request: UpdateRequest,
    },
    Rollback {
        name: String,
        version: u32,
    },
    Manifest {
        name: String,
        version: u32,
    },
    History {
        name: String,
    },
    PlatformList,
    Info {
        name: String,
    },
    State {
        names: Vec<String>,
    },
}

#[derive(Default)]
struct Inner {
    calls: Mutex<Vec<Call>>,
    deployment: Mutex<Option<StreamDeployment>>,
    states: Mutex<HashMap<DefinitionId, AppStates>>,
    platforms: Mutex<Vec<Deployer>>,
    records: Mutex<Vec<ReleaseRecord>>,
    manifest: Mutex<String>,
    reject_status: Mutex<Option<u16>>,
}

/// Release backend double with scripted responses and a call log.
#[derive(Clone, Default)]
pub struct MockReleaseBackend {
    inner: Arc<Inner>,
}

impl MockReleaseBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.lock().clone()
    }

    pub fn set_deployment(&self, deployment: StreamDeployment) {
        *self.inner.deployment.lock() = Some(deployment);
    }

    pub fn set_states(&self, id: DefinitionId, states: AppStates) {
        self.inner.states.lock().insert(id, states);
    }

    pub fn set_platforms(&self, platforms: Vec<Deployer>) {
        *self.inner.platforms.lock() = platforms;
    }

    pub fn set_records(&self, records: Vec<ReleaseRecord>) {
        *self.inner.records.lock() = records;
    }

    pub fn set_manifest(&self, manifest: &str) {
        *self.inner.manifest.lock() = manifest.to_string();
    }

    /// Make every subsequent call fail with the given response status.
    pub fn reject_with(&self, status: u16) {
        *self.inner.reject_status.lock() = Some(status);
    }

    fn record(&self, call: Call) -> Result<(), BackendError> {
        self.inner.calls.lock().push(call);
        if let Some(status) = *self.inner.reject_status.lock() {
            return Err(BackendError::Response {
                status,
                message: "scripted failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ReleaseBackend for MockReleaseBackend {
    async fn deploy_stream(
        &self,
        name: &StreamName,
        properties: &BTreeMap<String, String>,
    ) -> Result<(), BackendError> {
        self.record(Call::Deploy {
            name: name.to_string(),
            properties: properties.clone(),
        })
    }

    async fn update_stream(
        &self,
        name: &StreamName,
        request: &UpdateRequest,
    ) -> Result<(), BackendError> {
        self.record(Call::Update {
            name: name.to_string(),
            request: request.clone(),
        })
    }

    async fn rollback_stream(
        &self,
        name: &StreamName,
        version: ReleaseVersion,
    ) -> Result<(), BackendError> {
        self.record(Call::Rollback {
            name: name.to_string(),
            version: version.get(),
        })
    }

    async fn manifest(
        &self,
        name: &StreamName,
        version: ReleaseVersion,
    ) -> Result<String, BackendError> {
        self.record(Call::Manifest {
            name: name.to_string(),
            version: version.get(),
        })?;
        Ok(self.inner.manifest.lock().clone())
    }

    async fn history(&self, name: &StreamName) -> Result<Vec<ReleaseRecord>, BackendError> {
        self.record(Call::History {
            name: name.to_string(),
        })?;
        Ok(self.inner.records.lock().clone())
    }

    async fn platform_list(&self) -> Result<Vec<Deployer>, BackendError> {
        self.record(Call::PlatformList)?;
        Ok(self.inner.platforms.lock().clone())
    }

    async fn info(&self, name: &StreamName) -> Result<Option<StreamDeployment>, BackendError> {
        self.record(Call::Info {
            name: name.to_string(),
        })?;
        Ok(self.inner.deployment.lock().clone())
    }

    async fn state(
        &self,
        definitions: &[StreamDefinition],
    ) -> Result<HashMap<DefinitionId, AppStates>, BackendError> {
        self.record(Call::State {
            names: definitions.iter().map(|d| d.name.to_string()).collect(),
        })?;
        let states = self.inner.states.lock();
        Ok(definitions
            .iter()
            .filter_map(|d| states.get(&d.id()).map(|s| (d.id(), s.clone())))
            .collect())
    }
}

pub fn name(value: &str) -> StreamName {
    StreamName::new(value).unwrap()
}

pub fn store_with(definitions: &[(&str, &str)]) -> InMemoryDefinitionStore {
    let store = InMemoryDefinitionStore::new();
    for (stream, dsl) in definitions {
        store.insert(StreamDefinition::new(name(stream), *dsl));
    }
    store
}
