// ABOUTME: Deployment snapshot and the resource projection returned by info queries.
// ABOUTME: Deployment properties stay a JSON-encoded string end to end.

use crate::types::StreamName;
use serde::{Deserialize, Serialize};

/// Snapshot of the active per-application property sets for a stream.
///
/// `deployment_properties` is one JSON object level deep
/// (`appName -> {propKey: propValue}`), kept serialized. The orchestrator
/// treats it opaquely and passes it through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDeployment {
    pub stream_name: StreamName,
    pub deployment_properties: String,
}

impl StreamDeployment {
    pub fn new(stream_name: StreamName, deployment_properties: impl Into<String>) -> Self {
        Self {
            stream_name,
            deployment_properties: deployment_properties.into(),
        }
    }
}

/// Output projection for a single stream, assembled fresh per query.
///
/// `deployment_properties` is deliberately a JSON-encoded *string*, not a
/// nested object. Downstream consumers depend on the double-encoded form,
/// so serialization must not flatten it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDeploymentResource {
    pub stream_name: StreamName,
    pub dsl_text: String,
    pub deployment_properties: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_keeps_properties_as_string() {
        let resource = StreamDeploymentResource {
            stream_name: StreamName::new("ticktock").unwrap(),
            dsl_text: "time | log".to_string(),
            deployment_properties: r#"{"time":{"a":"1"}}"#.to_string(),
            status: "deployed".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&resource).unwrap();
        assert!(json["deploymentProperties"].is_string());
        assert_eq!(
            json["deploymentProperties"].as_str().unwrap(),
            r#"{"time":{"a":"1"}}"#
        );
    }
}
