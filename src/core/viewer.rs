//! Event-driven viewer shell.
//!
//! [`Viewer`] owns everything the presentation layer talks to: the load
//! state (with the [`Deck`] once data is available), the gesture tracker and
//! the render boundary. Input arrives as [`ViewerEvent`]s, one at a time, and
//! is mapped onto deck operations.
//!
//! # Initialization
//! 1. **Read position**: The raw stored position is read before any data exists
//! 2. **Load collection**: The data file is read and parsed
//! 3. **Resolve**: On success the stored position is validated against the
//!    collection length and the deck is built; on failure the viewer settles in
//!    a terminal "no data" state

use crate::core::{
    boundary::RenderBoundary,
    card::{render_card, render_empty, render_load_failed},
    collection::Collection,
    config::ViewerConfig,
    deck::Deck,
    error::Result,
    gesture::{Gesture, GestureThresholds, GestureTracker, Point},
    position::{PersistedPosition, PositionStore},
    selector::ExampleSelector,
};
use rand::rngs::SmallRng;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Where keyboard focus was when a key was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Viewport,
    JumpInput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    Next,
    Previous,
    Key { key: ArrowKey, focus: Focus },
    SubmitJump(String),
    ToggleDetails,
    ToggleTranslation,
    PointerStart(Point),
    PointerMove(Point),
    PointerEnd,
    Retry,
}

pub enum LoadState<R: Rng = SmallRng> {
    /// Reading or parsing the collection failed
    Failed { reason: String },
    /// The collection loaded but holds no entries
    Empty,
    Ready(Deck<R>),
}

pub struct Viewer<R: Rng = SmallRng> {
    state: LoadState<R>,
    gestures: GestureTracker,
    boundary: RenderBoundary,
}

impl Viewer<SmallRng> {
    /// Read the stored position, load the collection and build the viewer
    pub fn open(
        config: &ViewerConfig,
        store: Box<dyn PositionStore>,
        selector: ExampleSelector<SmallRng>,
    ) -> Self {
        let persisted = PersistedPosition::read(store.as_ref(), &config.session_key);
        log::debug!("Stored position before load: {:?}", persisted.raw());

        let loaded = Collection::load(&config.data_path);
        Self::from_load(
            loaded,
            persisted,
            store,
            &config.session_key,
            config.gestures,
            selector,
        )
    }
}

impl<R: Rng> Viewer<R> {
    pub fn from_load(
        loaded: Result<Collection>,
        persisted: PersistedPosition,
        store: Box<dyn PositionStore>,
        session_key: &str,
        thresholds: GestureThresholds,
        selector: ExampleSelector<R>,
    ) -> Self {
        let state = match loaded {
            Err(e) => {
                log::error!("Error loading grammar points: {e}");
                LoadState::Failed {
                    reason: e.to_string(),
                }
            }
            Ok(collection) if collection.is_empty() => {
                log::warn!("Grammar point collection is empty");
                LoadState::Empty
            }
            Ok(collection) => {
                LoadState::Ready(Deck::open(collection, &persisted, store, session_key, selector))
            }
        };

        Self {
            state,
            gestures: GestureTracker::new(thresholds),
            boundary: RenderBoundary::new(),
        }
    }

    pub fn state(&self) -> &LoadState<R> {
        &self.state
    }

    pub fn deck(&self) -> Option<&Deck<R>> {
        match &self.state {
            LoadState::Ready(deck) => Some(deck),
            _ => None,
        }
    }

    pub fn boundary(&self) -> &RenderBoundary {
        &self.boundary
    }

    /// Apply one event; returns whether anything visible changed
    pub fn handle(&mut self, event: ViewerEvent) -> bool {
        if let ViewerEvent::Retry = event {
            let had_error = self.boundary.has_error();
            self.boundary.retry();
            return had_error;
        }

        // Nothing behind the fallback screen reacts to input
        if self.boundary.has_error() {
            return false;
        }

        match event {
            ViewerEvent::PointerStart(point) => {
                self.gestures.start(point);
                false
            }
            ViewerEvent::PointerMove(point) => {
                self.gestures.move_to(point);
                false
            }
            ViewerEvent::PointerEnd => {
                let gesture = self.gestures.end();
                log::debug!("Pointer gesture classified as {gesture:?}");
                match gesture {
                    Gesture::SwipeLeft => self.with_deck(Deck::next),
                    Gesture::SwipeRight => self.with_deck(Deck::previous),
                    Gesture::Scroll | Gesture::NoOp => false,
                }
            }
            ViewerEvent::Key {
                focus: Focus::JumpInput,
                ..
            } => false,
            ViewerEvent::Key {
                key: ArrowKey::Left,
                ..
            }
            | ViewerEvent::Previous => self.with_deck(Deck::previous),
            ViewerEvent::Key {
                key: ArrowKey::Right,
                ..
            }
            | ViewerEvent::Next => self.with_deck(Deck::next),
            ViewerEvent::SubmitJump(input) => self.with_deck(|deck| deck.jump_to(&input)),
            ViewerEvent::ToggleDetails => self.with_deck(|deck| {
                deck.toggle_details();
                true
            }),
            ViewerEvent::ToggleTranslation => self.with_deck(|deck| {
                deck.toggle_translation();
                true
            }),
            ViewerEvent::Retry => false,
        }
    }

    /// Render the current screen
    pub fn render(&mut self) -> String {
        match &self.state {
            LoadState::Failed { reason } => render_load_failed(reason),
            LoadState::Empty => render_empty(),
            LoadState::Ready(deck) => self.boundary.render(|| render_card(deck)),
        }
    }

    fn with_deck<F>(&mut self, action: F) -> bool
    where
        F: FnOnce(&mut Deck<R>) -> bool,
    {
        match &mut self.state {
            LoadState::Ready(deck) => action(deck),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collection::{Entry, Example};
    use crate::core::error::DeckError;
    use crate::core::level::Level;
    use crate::core::position::{FileStore, MemoryStore, DEFAULT_SESSION_KEY};
    use crate::core::templates::strip_ansi_codes;
    use std::fs;
    use tempfile::TempDir;

    fn collection(len: usize) -> Collection {
        Collection::new(
            (0..len)
                .map(|i| Entry {
                    id: None,
                    order: None,
                    name: format!("point{i}"),
                    romaji: String::new(),
                    meaning: String::new(),
                    level: Level::Advanced,
                    equivalent: String::new(),
                    reference: String::new(),
                    examples: vec![Example {
                        japanese: format!("文{i}"),
                        english: format!("sentence {i}"),
                        grammar_point_index: None,
                        grammar_point: None,
                    }],
                })
                .collect(),
        )
    }

    fn viewer(len: usize, stored: Option<&str>) -> Viewer {
        let mut store = MemoryStore::new();
        if let Some(value) = stored {
            store.set(DEFAULT_SESSION_KEY, value).unwrap();
        }
        let persisted = PersistedPosition::read(&store, DEFAULT_SESSION_KEY);
        Viewer::from_load(
            Ok(collection(len)),
            persisted,
            Box::new(store),
            DEFAULT_SESSION_KEY,
            GestureThresholds::default(),
            ExampleSelector::seeded(5),
        )
    }

    fn index(viewer: &Viewer) -> usize {
        viewer.deck().map(Deck::index).unwrap()
    }

    fn swipe(viewer: &mut Viewer, from: (f64, f64), to: (f64, f64)) -> bool {
        viewer.handle(ViewerEvent::PointerStart(Point::new(from.0, from.1)));
        viewer.handle(ViewerEvent::PointerMove(Point::new(to.0, to.1)));
        viewer.handle(ViewerEvent::PointerEnd)
    }

    #[test]
    fn test_end_to_end_wraparound_from_stored_position() {
        let mut viewer = viewer(5, Some("2"));
        assert_eq!(index(&viewer), 2);

        for _ in 0..3 {
            viewer.handle(ViewerEvent::Next);
        }
        assert_eq!(index(&viewer), 0);
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut viewer = viewer(3, None);
        viewer.handle(ViewerEvent::Key {
            key: ArrowKey::Left,
            focus: Focus::Viewport,
        });
        assert_eq!(index(&viewer), 2);

        viewer.handle(ViewerEvent::Key {
            key: ArrowKey::Right,
            focus: Focus::Viewport,
        });
        assert_eq!(index(&viewer), 0);
    }

    #[test]
    fn test_arrow_keys_ignored_in_jump_input() {
        let mut viewer = viewer(3, Some("1"));
        let changed = viewer.handle(ViewerEvent::Key {
            key: ArrowKey::Right,
            focus: Focus::JumpInput,
        });
        assert!(!changed);
        assert_eq!(index(&viewer), 1);
    }

    #[test]
    fn test_swipes_navigate_and_scroll_does_not() {
        let mut viewer = viewer(4, None);

        assert!(swipe(&mut viewer, (0.0, 0.0), (-60.0, 0.0)));
        assert_eq!(index(&viewer), 1);

        assert!(swipe(&mut viewer, (0.0, 0.0), (-60.0, -40.0)));
        assert_eq!(index(&viewer), 2);

        assert!(!swipe(&mut viewer, (0.0, 0.0), (0.0, -60.0)));
        assert_eq!(index(&viewer), 2);

        assert!(swipe(&mut viewer, (0.0, 0.0), (70.0, 0.0)));
        assert_eq!(index(&viewer), 1);
    }

    #[test]
    fn test_jump_submission() {
        let mut viewer = viewer(5, None);
        assert!(viewer.handle(ViewerEvent::SubmitJump("4".to_string())));
        assert_eq!(index(&viewer), 3);

        assert!(!viewer.handle(ViewerEvent::SubmitJump("9".to_string())));
        assert_eq!(index(&viewer), 3);
    }

    #[test]
    fn test_details_toggle_and_reset() {
        let mut viewer = viewer(2, None);
        viewer.handle(ViewerEvent::ToggleDetails);
        assert!(strip_ansi_codes(&viewer.render()).contains("Hide Details"));

        viewer.handle(ViewerEvent::Next);
        assert!(strip_ansi_codes(&viewer.render()).contains("Show Details"));
    }

    #[test]
    fn test_load_failure_is_terminal_no_data_state() {
        let mut viewer: Viewer = Viewer::from_load(
            Err(DeckError::data_file_not_found("missing.json")),
            PersistedPosition::default(),
            Box::new(MemoryStore::new()),
            DEFAULT_SESSION_KEY,
            GestureThresholds::default(),
            ExampleSelector::seeded(5),
        );

        assert!(matches!(viewer.state(), LoadState::Failed { .. }));
        assert!(!viewer.handle(ViewerEvent::Next));
        assert!(!viewer.handle(ViewerEvent::SubmitJump("1".to_string())));
        assert!(strip_ansi_codes(&viewer.render())
            .contains("Could not load grammar points: Grammar point file does not exist"));
    }

    #[test]
    fn test_empty_collection_state() {
        let mut viewer = viewer(0, Some("4"));
        assert!(matches!(viewer.state(), LoadState::Empty));
        assert!(!viewer.handle(ViewerEvent::Previous));
        assert_eq!(
            strip_ansi_codes(&viewer.render()),
            "No grammar points available."
        );
    }

    #[test]
    fn test_retry_without_fault_changes_nothing() {
        let mut viewer = viewer(2, None);
        assert!(!viewer.handle(ViewerEvent::Retry));
        assert!(!viewer.boundary().has_error());
    }

    #[test]
    fn test_render_fault_blocks_input_until_retry() {
        let mut viewer = viewer(3, None);
        viewer
            .boundary
            .render(|| Err(DeckError::render("broken card")));

        assert!(!viewer.handle(ViewerEvent::Next));
        assert_eq!(index(&viewer), 0);
        assert!(strip_ansi_codes(&viewer.render()).contains("Something went wrong."));

        assert!(viewer.handle(ViewerEvent::Retry));
        assert!(viewer.handle(ViewerEvent::Next));
        assert_eq!(index(&viewer), 1);
        assert!(strip_ansi_codes(&viewer.render()).contains("Grammar Point 2 / 3"));
    }

    #[test]
    fn test_open_reads_store_and_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let data_path = temp_dir.path().join("points.json");
        let state_path = temp_dir.path().join("state.json");
        fs::write(
            &data_path,
            serde_json::to_string(&collection(5)).unwrap(),
        )
        .unwrap();

        let mut store = FileStore::open(&state_path);
        store.set(DEFAULT_SESSION_KEY, "3").unwrap();

        let config = ViewerConfig {
            data_path,
            ..ViewerConfig::default()
        };
        let mut viewer = Viewer::open(&config, Box::new(store), ExampleSelector::seeded(1));
        assert_eq!(index(&viewer), 3);

        viewer.handle(ViewerEvent::Next);
        let reopened = FileStore::open(&state_path);
        assert_eq!(reopened.get(DEFAULT_SESSION_KEY), Some("4".to_string()));
    }
}
