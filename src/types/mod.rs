// ABOUTME: Core value types shared across the crate.
// ABOUTME: Exports validated newtypes for stream names and release versions.

mod release_version;
mod stream_name;

pub use release_version::{ReleaseVersion, ReleaseVersionError};
pub use stream_name::{StreamName, StreamNameError};
