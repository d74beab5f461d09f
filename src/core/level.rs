//! Type-safe difficulty level for grammar points.
//!
//! The source data tags every grammar point with a single-letter level code
//! (`B`, `I` or `A`). This module turns that tag into [`Level`] so the rest of
//! the crate never matches on raw strings.
//!
//! # Public API
//! - [`Level`]: Difficulty level enumeration, including an `Unknown` fallback

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Difficulty level of a grammar point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Basic (B)
    Basic,
    /// Intermediate (I)
    Intermediate,
    /// Advanced (A)
    Advanced,
    /// Any tag outside the closed set, including an empty one
    #[default]
    Unknown,
}

impl Level {
    /// Short code as found in the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Basic => "B",
            Level::Intermediate => "I",
            Level::Advanced => "A",
            Level::Unknown => "",
        }
    }

    /// Human-readable label for the card badge
    pub fn label(&self) -> &'static str {
        match self {
            Level::Basic => "Basic",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Level::Unknown)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for Level {
    fn from(tag: &str) -> Self {
        match tag.trim() {
            "B" => Level::Basic,
            "I" => Level::Intermediate,
            "A" => Level::Advanced,
            _ => Level::Unknown,
        }
    }
}

impl From<String> for Level {
    fn from(tag: String) -> Self {
        Level::from(tag.as_str())
    }
}

// Unrecognized tags must not fail the whole collection load, so the level is
// (de)serialized through its short code rather than a derived enum repr.
impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.map(Level::from).unwrap_or_default())
    }
}

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
