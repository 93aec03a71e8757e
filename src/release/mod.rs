// ABOUTME: Release-side value types: properties, update requests, history records.
// ABOUTME: Owns the reserved-key conventions shared with binding layers.

mod properties;
mod record;
mod request;

pub use properties::{
    APP_VERSION_PREFIX, PACKAGE_NAME_KEY, PACKAGE_VERSION_KEY, PackageIdentifier,
    ReleaseProperties,
};
pub use record::ReleaseRecord;
pub use request::UpdateRequest;
