//! The navigation controller: collection, position, and per-card display state.
//!
//! [`Deck`] only exists once a collection has been loaded, so navigation and
//! example selection can never run against an unknown length. Every
//! successful `next`, `previous` or `jump_to` runs the same activation step:
//! the display state is reset, a fresh example is drawn for the new card, and
//! the position is written to the store.
//!
//! # Public API
//! - [`DisplayState`]: Selected example and visibility flags for the active card
//! - [`Deck`]: Navigation controller over a loaded collection

use crate::core::{
    collection::{Collection, Entry, Example},
    navigation::Navigator,
    position::{PersistedPosition, PositionStore},
    selector::ExampleSelector,
};
use rand::rngs::SmallRng;
use rand::Rng;

/// Transient state of the active card; rebuilt on every navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// Index into the entry's examples, `None` when it has none
    pub example: Option<usize>,
    pub details_visible: bool,
    pub translation_revealed: bool,
}

pub struct Deck<R: Rng = SmallRng> {
    collection: Collection,
    navigator: Navigator,
    display: DisplayState,
    selector: ExampleSelector<R>,
    store: Box<dyn PositionStore>,
    session_key: String,
}

impl<R: Rng> Deck<R> {
    /// Build the deck for a freshly loaded collection
    ///
    /// The persisted position is validated against the collection length here,
    /// and the resolved position is written back so a stale value does not
    /// survive the session.
    pub fn open(
        collection: Collection,
        persisted: &PersistedPosition,
        store: Box<dyn PositionStore>,
        session_key: impl Into<String>,
        selector: ExampleSelector<R>,
    ) -> Self {
        let start = persisted.resolve(collection.len());
        if persisted.raw().is_some_and(|raw| raw.trim() != start.to_string()) {
            log::debug!(
                "Stored position {:?} adjusted to {start} for {} entries",
                persisted.raw(),
                collection.len()
            );
        }

        let navigator = Navigator::new(collection.len(), start);
        let mut deck = Self {
            collection,
            navigator,
            display: DisplayState::default(),
            selector,
            store,
            session_key: session_key.into(),
        };
        deck.activate();
        deck
    }

    pub fn index(&self) -> usize {
        self.navigator.index()
    }

    /// 1-based position of the active card
    pub fn position(&self) -> usize {
        self.navigator.position()
    }

    pub fn len(&self) -> usize {
        self.navigator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.navigator.is_empty()
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.collection.get(self.navigator.index())
    }

    pub fn current_example(&self) -> Option<&Example> {
        let entry = self.current_entry()?;
        entry.examples.get(self.display.example?)
    }

    pub fn next(&mut self) -> bool {
        let moved = self.navigator.next().is_some();
        if moved {
            self.activate();
        }
        moved
    }

    pub fn previous(&mut self) -> bool {
        let moved = self.navigator.previous().is_some();
        if moved {
            self.activate();
        }
        moved
    }

    /// Jump to a user-entered 1-based number; invalid input is ignored
    pub fn jump_to(&mut self, input: &str) -> bool {
        let moved = self.navigator.jump_to(input).is_some();
        if moved {
            self.activate();
        }
        moved
    }

    pub fn toggle_details(&mut self) {
        self.display.details_visible = !self.display.details_visible;
    }

    pub fn toggle_translation(&mut self) {
        self.display.translation_revealed = !self.display.translation_revealed;
    }

    // Runs after every index change, including the initial one.
    fn activate(&mut self) {
        let example = self
            .collection
            .get(self.navigator.index())
            .and_then(|entry| self.selector.select(entry));

        self.display = DisplayState {
            example,
            ..DisplayState::default()
        };

        if self.navigator.is_empty() {
            return;
        }

        let value = self.navigator.index().to_string();
        if let Err(e) = self.store.set(&self.session_key, &value) {
            log::warn!("Position save failed (navigation will continue): {e}");
        }
    }
}
