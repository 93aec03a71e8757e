// ABOUTME: Update request value type for release version transitions.
// ABOUTME: Immutable once constructed; package identity is derived from the properties.

use super::properties::{PackageIdentifier, ReleaseProperties};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input to an update operation on a stream's release.
///
/// The orchestrator forwards this to the release backend unmodified; the
/// backend interprets the reserved keys and computes the next release
/// version. Submitting the same request twice is safe under the backend's
/// version-compare semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    release_name: String,
    package_identifier: Option<PackageIdentifier>,
    properties: ReleaseProperties,
}

impl UpdateRequest {
    pub fn new(release_name: impl Into<String>, properties: ReleaseProperties) -> Self {
        let package_identifier = properties.identity();
        Self {
            release_name: release_name.into(),
            package_identifier,
            properties,
        }
    }

    /// Build a request from the flat wire-form property map.
    pub fn from_flat(release_name: impl Into<String>, flat: &BTreeMap<String, String>) -> Self {
        Self::new(release_name, ReleaseProperties::from_flat(flat))
    }

    pub fn release_name(&self) -> &str {
        &self.release_name
    }

    pub fn package_identifier(&self) -> Option<&PackageIdentifier> {
        self.package_identifier.as_ref()
    }

    pub fn properties(&self) -> &ReleaseProperties {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::{PACKAGE_NAME_KEY, PACKAGE_VERSION_KEY};

    #[test]
    fn package_identifier_derived_from_properties() {
        let flat: BTreeMap<String, String> = [
            (PACKAGE_NAME_KEY.to_string(), "ticktock".to_string()),
            (PACKAGE_VERSION_KEY.to_string(), "1.0.0".to_string()),
            ("version.log".to_string(), "1.2.0.RELEASE".to_string()),
        ]
        .into_iter()
        .collect();

        let request = UpdateRequest::from_flat("ticktock", &flat);

        assert_eq!(request.release_name(), "ticktock");
        assert_eq!(
            request.package_identifier(),
            Some(&PackageIdentifier::new("ticktock", "1.0.0"))
        );
        assert_eq!(request.properties().app_version("log"), Some("1.2.0.RELEASE"));
    }

    #[test]
    fn no_identity_without_reserved_keys() {
        let flat: BTreeMap<String, String> =
            [("deployer.memory".to_string(), "512m".to_string())]
                .into_iter()
                .collect();

        let request = UpdateRequest::from_flat("ticktock", &flat);
        assert_eq!(request.package_identifier(), None);
    }
}
