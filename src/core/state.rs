//! On-disk shape of the key-value state file.
//!
//! The viewer only ever stores the last shown position, but the file is a
//! general string-to-string map so the key stays configurable.
//!
//! # Public API
//! - [`StateFile`]: Serializable map of stored values with a timestamp

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFile {
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    pub last_updated: DateTime<Utc>,
}

impl StateFile {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.last_updated = Utc::now();
    }
}

impl Default for StateFile {
    fn default() -> Self {
        Self::new()
    }
}
