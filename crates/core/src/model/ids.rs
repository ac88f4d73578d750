use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of an assessment track, e.g. `startup`.
///
/// Always a non-empty lowercase slug made of `a-z`, `0-9` and `-`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackId(String);

impl TrackId {
    /// Creates a `TrackId` after checking the slug rules.
    ///
    /// # Errors
    ///
    /// Returns `ParseTrackIdError` if the value is empty or contains
    /// characters outside `a-z`, `0-9` and `-`.
    pub fn new(raw: impl Into<String>) -> Result<Self, ParseTrackIdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ParseTrackIdError::Empty);
        }
        if let Some(ch) = raw
            .chars()
            .find(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-'))
        {
            return Err(ParseTrackIdError::InvalidChar { ch, raw });
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error type for parsing a `TrackId` from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTrackIdError {
    #[error("track id cannot be empty")]
    Empty,
    #[error("track id {raw:?} contains invalid character {ch:?}")]
    InvalidChar { ch: char, raw: String },
}

impl fmt::Debug for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackId({})", self.0)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TrackId {
    type Err = ParseTrackIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TrackId {
    type Error = ParseTrackIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TrackId> for String {
    fn from(id: TrackId) -> Self {
        id.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
