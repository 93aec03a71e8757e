// ABOUTME: Release property maps with reserved-key classification.
// ABOUTME: Package identity and per-app version overrides are typed fields, not magic strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Reserved key naming the package artifact for a release.
pub const PACKAGE_NAME_KEY: &str = "package.name";
/// Reserved key naming the package artifact version for a release.
pub const PACKAGE_VERSION_KEY: &str = "package.version";
/// Prefix of per-application version override keys (`version.<appName>`).
pub const APP_VERSION_PREFIX: &str = "version.";

/// Identifies which release artifact a stream runs: package name + version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageIdentifier {
    pub package_name: String,
    pub package_version: String,
}

impl PackageIdentifier {
    pub fn new(package_name: impl Into<String>, package_version: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            package_version: package_version.into(),
        }
    }
}

/// An ordered mapping of release properties, partitioned by convention.
///
/// The wire form is a flat string map with reserved keys; here the release
/// identity and the `version.<app>` overrides are explicit fields so the
/// orchestrator never does runtime string lookups for them. Everything else
/// passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseProperties {
    identity_name: Option<String>,
    identity_version: Option<String>,
    app_versions: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
}

impl ReleaseProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a flat key-value map into identity, overrides, and pass-through.
    pub fn from_flat(flat: &BTreeMap<String, String>) -> Self {
        let mut out = Self::default();
        for (key, value) in flat {
            out.set(key, value.clone());
        }
        out
    }

    /// Route one key to its partition. Last write wins for every key.
    pub fn set(&mut self, key: &str, value: String) {
        if key == PACKAGE_NAME_KEY {
            self.identity_name = Some(value);
        } else if key == PACKAGE_VERSION_KEY {
            self.identity_version = Some(value);
        } else if let Some(app) = key.strip_prefix(APP_VERSION_PREFIX) {
            self.app_versions.insert(app.to_string(), value);
        } else {
            self.properties.insert(key.to_string(), value);
        }
    }

    /// The package identity, present only when both reserved keys were set.
    pub fn identity(&self) -> Option<PackageIdentifier> {
        match (&self.identity_name, &self.identity_version) {
            (Some(name), Some(version)) => Some(PackageIdentifier::new(name, version)),
            _ => None,
        }
    }

    pub fn app_version(&self, app: &str) -> Option<&str> {
        self.app_versions.get(app).map(String::as_str)
    }

    pub fn app_versions(&self) -> &BTreeMap<String, String> {
        &self.app_versions
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.identity_name.is_none()
            && self.identity_version.is_none()
            && self.app_versions.is_empty()
            && self.properties.is_empty()
    }

    /// Merge `other` into `self`, key by key, last write wins.
    ///
    /// Merging the same map twice is equivalent to merging it once, which is
    /// what makes update re-submission safe.
    pub fn merge(&mut self, other: &ReleaseProperties) {
        if let Some(name) = &other.identity_name {
            self.identity_name = Some(name.clone());
        }
        if let Some(version) = &other.identity_version {
            self.identity_version = Some(version.clone());
        }
        for (app, version) in &other.app_versions {
            self.app_versions.insert(app.clone(), version.clone());
        }
        for (key, value) in &other.properties {
            self.properties.insert(key.clone(), value.clone());
        }
    }

    /// Render back to the flat wire form, reserved keys included.
    pub fn to_flat(&self) -> BTreeMap<String, String> {
        let mut flat = BTreeMap::new();
        if let Some(name) = &self.identity_name {
            flat.insert(PACKAGE_NAME_KEY.to_string(), name.clone());
        }
        if let Some(version) = &self.identity_version {
            flat.insert(PACKAGE_VERSION_KEY.to_string(), version.clone());
        }
        for (app, version) in &self.app_versions {
            flat.insert(format!("{APP_VERSION_PREFIX}{app}"), version.clone());
        }
        for (key, value) in &self.properties {
            flat.insert(key.clone(), value.clone());
        }
        flat
    }
}

// On the wire these are the flat ordered string map of the data model, not
// the internal tagged form.
impl Serialize for ReleaseProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_flat().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ReleaseProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flat = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(Self::from_flat(&flat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reserved_keys_become_identity() {
        let props = ReleaseProperties::from_flat(&flat(&[
            (PACKAGE_NAME_KEY, "ticktock"),
            (PACKAGE_VERSION_KEY, "1.0.0"),
            ("version.log", "1.2.0"),
            ("app.log.level", "DEBUG"),
        ]));

        assert_eq!(
            props.identity(),
            Some(PackageIdentifier::new("ticktock", "1.0.0"))
        );
        assert_eq!(props.app_version("log"), Some("1.2.0"));
        assert_eq!(props.get("app.log.level"), Some("DEBUG"));
    }

    #[test]
    fn identity_requires_both_keys() {
        let props = ReleaseProperties::from_flat(&flat(&[(PACKAGE_NAME_KEY, "ticktock")]));
        assert_eq!(props.identity(), None);
    }

    #[test]
    fn flat_round_trip_preserves_every_key() {
        let input = flat(&[
            (PACKAGE_NAME_KEY, "ticktock"),
            (PACKAGE_VERSION_KEY, "1.0.0"),
            ("version.time", "2.0.1"),
            ("deployer.memory", "512m"),
        ]);
        let props = ReleaseProperties::from_flat(&input);
        assert_eq!(props.to_flat(), input);
    }

    #[test]
    fn merge_is_last_write_wins() {
        let mut base = ReleaseProperties::from_flat(&flat(&[
            (PACKAGE_VERSION_KEY, "1.0.0"),
            ("deployer.memory", "256m"),
        ]));
        let overlay = ReleaseProperties::from_flat(&flat(&[
            (PACKAGE_VERSION_KEY, "1.1.0"),
            ("deployer.cpu", "2"),
        ]));

        base.merge(&overlay);

        assert_eq!(base.to_flat().get(PACKAGE_VERSION_KEY).unwrap(), "1.1.0");
        assert_eq!(base.get("deployer.memory"), Some("256m"));
        assert_eq!(base.get("deployer.cpu"), Some("2"));
    }

    #[test]
    fn serializes_as_flat_map() {
        let props = ReleaseProperties::from_flat(&flat(&[
            (PACKAGE_NAME_KEY, "ticktock"),
            ("version.log", "1.2.0"),
        ]));

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"package.name": "ticktock", "version.log": "1.2.0"})
        );

        let back: ReleaseProperties = serde_json::from_value(json).unwrap();
        assert_eq!(back, props);
    }

    #[test]
    fn merge_twice_equals_merge_once() {
        let mut once = ReleaseProperties::from_flat(&flat(&[("a", "1")]));
        let overlay = ReleaseProperties::from_flat(&flat(&[("a", "2"), ("b", "3")]));

        let mut twice = once.clone();
        once.merge(&overlay);
        twice.merge(&overlay);
        twice.merge(&overlay);

        assert_eq!(once, twice);
    }
}
