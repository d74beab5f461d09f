//! Persisted position and the key-value store behind it.
//!
//! The last shown index is read before the collection is loaded, so it
//! cannot be trusted yet. [`PersistedPosition`] holds the raw value until the
//! collection length is known, then [`PersistedPosition::resolve`] clamps it.
//!
//! # Public API
//! - [`PositionStore`]: Read/write contract for the key-value store
//! - [`FileStore`]: JSON file backed store
//! - [`MemoryStore`]: In-process store
//! - [`PersistedPosition`]: Raw persisted value awaiting validation
//!
//! # Resolution Rules
//! - **Missing or unparseable**: index 0
//! - **Negative**: index 0
//! - **Past the end**: clamped to the last entry
//! - **Empty collection**: index 0

use crate::core::{
    error::{DeckError, Result},
    state::StateFile,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the last position is stored by default
pub const DEFAULT_SESSION_KEY: &str = "lastGrammarPoint";

pub trait PositionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store kept in a JSON file, written through on every `set`
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    state: StateFile,
}

impl FileStore {
    /// Open the store, starting empty when the file is missing or unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match Self::read_state(&path) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Ignoring unreadable state file: {e}");
                StateFile::new()
            }
        };
        Self { path, state }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(path: &Path) -> Result<StateFile> {
        if !path.exists() {
            log::debug!("State file does not exist yet: {}", path.display());
            return Ok(StateFile::new());
        }

        let content =
            fs::read_to_string(path).map_err(|e| DeckError::state_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| DeckError::state_parse_failed(path, e))
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| DeckError::state_directory_creation_failed(dir, e))?;
        }

        let json = serde_json::to_string_pretty(&self.state)
            .map_err(DeckError::state_serialization_failed)?;
        fs::write(&self.path, json).map_err(|e| DeckError::state_write_failed(&self.path, e))?;

        log::debug!("Saved state to {}", self.path.display());
        Ok(())
    }
}

impl PositionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.state.get(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.state.set(key, value);
        self.save()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PositionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A stored position read before the collection size is known
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistedPosition {
    raw: Option<String>,
}

impl PersistedPosition {
    pub fn read(store: &dyn PositionStore, key: &str) -> Self {
        Self::from_raw(store.get(key))
    }

    pub fn from_raw(raw: Option<String>) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Validate against a collection of `len` entries
    pub fn resolve(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }

        let Some(raw) = self.raw.as_deref() else {
            return 0;
        };

        match raw.trim().parse::<i64>() {
            Ok(value) if value < 0 => 0,
            Ok(value) => usize::try_from(value).map_or(len - 1, |index| index.min(len - 1)),
            Err(_) => {
                log::warn!("Ignoring unparseable stored position {raw:?}");
                0
            }
        }
    }
}
