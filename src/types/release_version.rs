// ABOUTME: Release iteration number newtype.
// ABOUTME: Guarantees the version is strictly positive before it reaches a backend.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseVersionError {
    #[error("release version must be a strictly positive integer, got {0}")]
    NotPositive(i32),
}

/// A release iteration number for a stream.
///
/// Versions start at 1 and increase by one per update; `0` and negative
/// values are rejected at construction so no backend call ever sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReleaseVersion(u32);

impl ReleaseVersion {
    pub fn new(value: i32) -> Result<Self, ReleaseVersionError> {
        if value <= 0 {
            return Err(ReleaseVersionError::NotPositive(value));
        }
        Ok(Self(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ReleaseVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ReleaseVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        ReleaseVersion::new(value).map_err(serde::de::Error::custom)
    }
}
