// ABOUTME: Stream definitions, their identity surrogate, and the definition store contract.
// ABOUTME: Includes an in-memory store used by the config-driven CLI and tests.

use crate::types::StreamName;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A named, immutable DSL-defined pipeline of linked applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDefinition {
    pub name: StreamName,
    pub dsl_text: String,
}

impl StreamDefinition {
    pub fn new(name: StreamName, dsl_text: impl Into<String>) -> Self {
        Self {
            name,
            dsl_text: dsl_text.into(),
        }
    }

    /// Stable content-derived identity for this definition.
    ///
    /// Batch state lookups are keyed on this surrogate rather than the name
    /// string, so a redefined stream (same name, different DSL) never aliases
    /// the state recorded for its predecessor.
    pub fn id(&self) -> DefinitionId {
        let mut hasher = DefaultHasher::new();
        self.name.as_str().hash(&mut hasher);
        self.dsl_text.hash(&mut hasher);
        DefinitionId(hasher.finish())
    }

    /// Application names in pipeline order, parsed from the DSL text.
    ///
    /// The DSL wire format is out of scope here; only the `|`-separated
    /// pipeline shape is recognized, enough to enumerate app labels.
    pub fn app_names(&self) -> Vec<&str> {
        self.dsl_text
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.split_whitespace().next().unwrap_or(s))
            .collect()
    }
}

/// Content-derived surrogate identity of a [`StreamDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefinitionId(u64);

/// Errors from a definition store lookup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("definition store unavailable: {0}")]
    Unavailable(String),
}

/// Lookup-by-name access to registered stream definitions.
///
/// Registration itself is external; the orchestrator only ever reads.
#[async_trait]
pub trait DefinitionStore: Send + Sync {
    async fn find_by_name(&self, name: &StreamName)
    -> Result<Option<StreamDefinition>, StoreError>;
}

/// Definition store backed by a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryDefinitionStore {
    definitions: RwLock<HashMap<StreamName, StreamDefinition>>,
}

impl InMemoryDefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, definition: StreamDefinition) {
        self.definitions
            .write()
            .insert(definition.name.clone(), definition);
    }
}

#[async_trait]
impl DefinitionStore for InMemoryDefinitionStore {
    async fn find_by_name(
        &self,
        name: &StreamName,
    ) -> Result<Option<StreamDefinition>, StoreError> {
        Ok(self.definitions.read().get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(name: &str, dsl: &str) -> StreamDefinition {
        StreamDefinition::new(StreamName::new(name).unwrap(), dsl)
    }

    #[test]
    fn id_is_stable_for_equal_content() {
        let a = definition("ticktock", "time | log");
        let b = definition("ticktock", "time | log");
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn redefinition_changes_id() {
        let a = definition("ticktock", "time | log");
        let b = definition("ticktock", "time | filter | log");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn app_names_follow_pipeline_order() {
        let def = definition("ticktock", "time --fixed-delay=5 | log");
        assert_eq!(def.app_names(), vec!["time", "log"]);
    }

    #[test]
    fn app_names_of_empty_dsl_is_empty() {
        let def = definition("broken", "   ");
        assert!(def.app_names().is_empty());
    }
}
