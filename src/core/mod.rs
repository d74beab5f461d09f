//! Core functionality for the grammar-deck viewer.
//!
//! This module provides the navigation, gesture and selection logic, the
//! collection model, persistence, error handling, and UI components.

pub mod boundary;
pub mod card;
pub mod collection;
pub mod colors;
pub mod command_init;
pub mod config;
pub mod deck;
pub mod dirs;
pub mod error;
pub mod gesture;
pub mod highlight;
pub mod jump_parser;
pub mod level;
pub mod navigation;
pub mod output;
pub mod position;
pub mod selector;
pub mod state;
pub mod templates;
pub mod viewer;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{DeckError, Result};

// === Collection model ===
// Grammar points and their example sentences as loaded from JSON
pub use collection::{Collection, Entry, Example};
pub use level::Level;

// === Navigation ===
// Wraparound cursor over the collection and 1-based jump parsing
pub use jump_parser::JumpParser;
pub use navigation::Navigator;

// === Gestures ===
// Pointer start/end classification into swipes and scrolls
pub use gesture::{classify, Gesture, GestureThresholds, GestureTracker, Point};

// === Example selection and highlighting ===
pub use highlight::{highlight, Highlight};
pub use selector::ExampleSelector;

// === Persistence ===
// Key-value store for the last shown position
pub use position::{FileStore, MemoryStore, PersistedPosition, PositionStore, DEFAULT_SESSION_KEY};
pub use state::StateFile;

// === Viewer ===
// Deck state, event dispatch and render fault isolation
pub use boundary::RenderBoundary;
pub use deck::{Deck, DisplayState};
pub use viewer::{ArrowKey, Focus, LoadState, Viewer, ViewerEvent};

// === Configuration and initialization ===
pub use command_init::{ViewerInit, ViewerOptions};
pub use config::ViewerConfig;

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Color system ===
pub use colors::{format_highlight, format_translation, get_level_badge, get_level_color_style};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_screen, write_screen, write_usage};
