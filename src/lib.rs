//! Grammar Deck - A terminal flashcard viewer for Japanese grammar points.
//!
//! This library provides the core functionality for grammar-deck: wraparound
//! navigation over a collection of grammar points, swipe gesture
//! classification, random example selection with grammar point highlighting,
//! and persistence of the last viewed position.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Collection loading and the entry model
//! - Navigation, jump parsing and gesture classification
//! - Example selection and text highlighting
//! - Position persistence and configuration
//! - Error handling and result types
//! - UI templates and color system

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Gestures
    classify,
    // Highlighting
    highlight,
    render_template,
    render_template_plain,
    strip_ansi_codes,

    ArrowKey,
    // Collection model
    Collection,
    Deck,
    // Error handling
    DeckError,
    Entry,
    Example,
    ExampleSelector,
    FileStore,
    Focus,
    Gesture,
    GestureThresholds,
    GestureTracker,
    Highlight,
    JumpParser,
    Level,
    LoadState,
    MemoryStore,
    // Navigation
    Navigator,
    PersistedPosition,
    Point,
    // Persistence
    PositionStore,
    Result,

    TemplateContext,
    // UI and formatting
    Templates,
    // Viewer and initialization
    Viewer,
    ViewerConfig,
    ViewerEvent,
    ViewerInit,
    ViewerOptions,
    TEMPLATES,
};
