// ABOUTME: Release history records as reported by the release backend.
// ABOUTME: One record per release iteration, ordered newest to oldest.

use crate::types::ReleaseVersion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a stream's release history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    /// Release name (matches the stream name).
    pub name: String,
    /// Release iteration this record describes.
    pub version: ReleaseVersion,
    /// Backend-reported status of the release (e.g. "DEPLOYED", "DELETED").
    pub status: String,
    /// Rendered manifest for the release, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
    /// When the release was created.
    pub created_at: DateTime<Utc>,
}
