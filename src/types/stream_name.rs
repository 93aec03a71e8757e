// ABOUTME: Validated stream name newtype.
// ABOUTME: Ensures names are safe to use as definition keys and URL path segments.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamNameError {
    #[error("stream name cannot be empty")]
    Empty,

    #[error("stream name exceeds maximum length of 255 characters")]
    TooLong,

    #[error("stream name cannot start with '{0}'")]
    StartsWithSeparator(char),

    #[error("stream name cannot end with '{0}'")]
    EndsWithSeparator(char),

    #[error("invalid character in stream name: '{0}'")]
    InvalidChar(char),
}

/// The unique, immutable key identifying a stream definition.
///
/// Allowed characters are ASCII alphanumerics plus `-`, `_` and `.`;
/// separators may not lead or trail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamName(String);

const SEPARATORS: [char; 3] = ['-', '_', '.'];

impl StreamName {
    pub fn new(value: &str) -> Result<Self, StreamNameError> {
        if value.is_empty() {
            return Err(StreamNameError::Empty);
        }

        if value.len() > 255 {
            return Err(StreamNameError::TooLong);
        }

        if let Some(first) = value.chars().next()
            && SEPARATORS.contains(&first)
        {
            return Err(StreamNameError::StartsWithSeparator(first));
        }

        if let Some(last) = value.chars().last()
            && SEPARATORS.contains(&last)
        {
            return Err(StreamNameError::EndsWithSeparator(last));
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && !SEPARATORS.contains(&c) {
                return Err(StreamNameError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for StreamName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StreamName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        StreamName::new(&value).map_err(serde::de::Error::custom)
    }
}
