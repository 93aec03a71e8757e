// ABOUTME: Deployer descriptor for one target execution platform.
// ABOUTME: Enumerated by the platform-list operation, never mutated here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Describes one target platform capable of running application instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployer {
    /// Platform name, unique within one backend snapshot.
    pub name: String,
    /// Platform type (e.g. "local", "kubernetes").
    #[serde(rename = "type")]
    pub deployer_type: String,
    /// Free-form environment metadata reported by the platform.
    #[serde(default)]
    pub environment_metadata: BTreeMap<String, String>,
}
