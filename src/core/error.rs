//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`DeckError`] which covers every failure the viewer can
//! run into. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the common failure scenarios.
//!
//! # Public API
//! - [`DeckError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, DeckError>`
//!
//! # Error Categories
//! - **Collection loading**: Missing data file, malformed JSON
//! - **State store**: Directory creation, serialization, read/write failures
//! - **Configuration**: Unreadable or malformed config files
//! - **Rendering**: Faults raised while building card output
//!
//! Invalid jump input has no variant; it is ignored, never reported.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for grammar-deck
#[derive(Error, Debug)]
pub enum DeckError {
    // Collection errors
    #[error("Grammar point file does not exist: {path}")]
    DataFileNotFound { path: PathBuf },

    #[error("Failed to read grammar point file '{path}': {source}")]
    DataReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse grammar point file '{path}': {source}")]
    DataParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // State store errors
    #[error("Could not find cache directory")]
    CacheDirectoryNotFound,

    #[error("Failed to create state directory '{path}': {source}")]
    StateDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize state data: {source}")]
    StateSerializationFailed { source: serde_json::Error },

    #[error("Failed to write state file '{path}': {source}")]
    StateWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read state file '{path}': {source}")]
    StateReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    StateParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // Rendering errors
    #[error("Grammar point {position} is not in the collection ({total} loaded)")]
    EntryMissing { position: usize, total: usize },

    #[error("Rendering failed: {message}")]
    Render { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using DeckError
pub type Result<T> = std::result::Result<T, DeckError>;

impl DeckError {
    /// Create a data file not found error
    pub fn data_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DataFileNotFound { path: path.into() }
    }

    /// Create a data read failed error
    pub fn data_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DataReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a data parse failed error
    pub fn data_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::DataParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state directory creation failed error
    pub fn state_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StateDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state serialization failed error
    pub fn state_serialization_failed(source: serde_json::Error) -> Self {
        Self::StateSerializationFailed { source }
    }

    /// Create a state write failed error
    pub fn state_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state read failed error
    pub fn state_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state parse failed error
    pub fn state_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::StateParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an entry missing error (position is 1-based)
    pub fn entry_missing(position: usize, total: usize) -> Self {
        Self::EntryMissing { position, total }
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}
