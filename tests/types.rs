// ABOUTME: Tests for the validated value types.
// ABOUTME: Covers stream name rules and release version bounds.

use rill::types::{ReleaseVersion, StreamName};

#[test]
fn accepts_typical_stream_names() {
    for value in ["ticktock", "testStream1", "my-stream.v2", "a"] {
        assert!(StreamName::new(value).is_ok(), "expected '{value}' to parse");
    }
}

#[test]
fn rejects_empty_name() {
    assert!(StreamName::new("").is_err());
}

#[test]
fn rejects_names_over_255_chars() {
    let long = "a".repeat(256);
    assert!(StreamName::new(&long).is_err());
}

#[test]
fn rejects_leading_and_trailing_separators() {
    for value in ["-stream", "stream-", ".stream", "stream_", "_stream"] {
        assert!(StreamName::new(value).is_err(), "expected '{value}' to fail");
    }
}

#[test]
fn rejects_invalid_characters() {
    for value in ["tick tock", "tick/tock", "tick|tock"] {
        assert!(StreamName::new(value).is_err(), "expected '{value}' to fail");
    }
}

#[test]
fn stream_name_round_trips_through_serde() {
    let name = StreamName::new("ticktock").unwrap();
    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, "\"ticktock\"");
    let back: StreamName = serde_json::from_str(&json).unwrap();
    assert_eq!(back, name);
}

#[test]
fn stream_name_deserialization_validates() {
    assert!(serde_json::from_str::<StreamName>("\"bad name\"").is_err());
}

#[test]
fn release_version_must_be_positive() {
    assert!(ReleaseVersion::new(1).is_ok());
    assert!(ReleaseVersion::new(666).is_ok());
    assert!(ReleaseVersion::new(0).is_err());
    assert!(ReleaseVersion::new(-2).is_err());
}

#[test]
fn release_version_deserialization_validates() {
    assert_eq!(
        serde_json::from_str::<ReleaseVersion>("3").unwrap(),
        ReleaseVersion::new(3).unwrap()
    );
    assert!(serde_json::from_str::<ReleaseVersion>("0").is_err());
}
