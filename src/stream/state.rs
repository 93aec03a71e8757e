// ABOUTME: Per-application deployment states and stream-level aggregation.
// ABOUTME: Reduces heterogeneous app states to one status by worst-case precedence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Run-time status of one application instance within a stream's release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentState {
    Deploying,
    Deployed,
    Failed,
    Partial,
    Undeployed,
    Error,
    Unknown,
}

impl DeploymentState {
    /// Aggregation precedence, highest first. Surfacing the worst-case
    /// condition gives operators the fastest signal; `deployed` only wins
    /// when no app reports anything above it.
    fn precedence(self) -> u8 {
        match self {
            DeploymentState::Failed => 6,
            DeploymentState::Error => 5,
            DeploymentState::Deploying => 4,
            DeploymentState::Partial => 3,
            DeploymentState::Deployed => 2,
            DeploymentState::Undeployed => 1,
            DeploymentState::Unknown => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeploymentState::Deploying => "deploying",
            DeploymentState::Deployed => "deployed",
            DeploymentState::Failed => "failed",
            DeploymentState::Partial => "partial",
            DeploymentState::Undeployed => "undeployed",
            DeploymentState::Error => "error",
            DeploymentState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reduce a set of per-application states to one stream-level state.
///
/// An empty input (a stream with zero applications, or no recorded state)
/// aggregates to `Unknown`.
pub fn aggregate<I>(states: I) -> DeploymentState
where
    I: IntoIterator<Item = DeploymentState>,
{
    states
        .into_iter()
        .max_by_key(|s| s.precedence())
        .unwrap_or(DeploymentState::Unknown)
}
