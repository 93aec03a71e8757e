// ABOUTME: Stream domain types: definitions, deployment snapshots, and app states.
// ABOUTME: Exports the definition store contract and the status aggregation helper.

mod definition;
mod deployment;
mod state;

pub use definition::{
    DefinitionId, DefinitionStore, InMemoryDefinitionStore, StoreError, StreamDefinition,
};
pub use deployment::{StreamDeployment, StreamDeploymentResource};
pub use state::{DeploymentState, aggregate};
