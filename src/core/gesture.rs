//! Pointer gesture classification.
//!
//! A touch interaction is a start sample, any number of move samples and an
//! end event. Only the start and the last move matter. On end the
//! interaction is classified as a horizontal swipe (navigation), a vertical
//! scroll, or nothing.
//!
//! # Public API
//! - [`Point`]: A 2D pointer coordinate
//! - [`GestureThresholds`]: Tunable pixel thresholds
//! - [`Gesture`]: Classification result
//! - [`GestureTracker`]: Per-interaction sample recorder
//! - [`classify`]: Pure decision function

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureThresholds {
    /// Minimum leftward/rightward travel for a swipe
    #[serde(default = "default_horizontal")]
    pub horizontal: f64,
    /// Vertical travel above which a mostly-vertical drag counts as a scroll
    #[serde(default = "default_vertical")]
    pub vertical: f64,
}

pub const DEFAULT_HORIZONTAL_THRESHOLD: f64 = 50.0;
pub const DEFAULT_VERTICAL_THRESHOLD: f64 = 10.0;

fn default_horizontal() -> f64 {
    DEFAULT_HORIZONTAL_THRESHOLD
}

fn default_vertical() -> f64 {
    DEFAULT_VERTICAL_THRESHOLD
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            horizontal: DEFAULT_HORIZONTAL_THRESHOLD,
            vertical: DEFAULT_VERTICAL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Finger dragged leftwards; shows the next card
    SwipeLeft,
    /// Finger dragged rightwards; shows the previous card
    SwipeRight,
    /// Mostly vertical drag; never navigates
    Scroll,
    NoOp,
}

/// Classify a drag from `start` to `end`
pub fn classify(start: Point, end: Point, thresholds: &GestureThresholds) -> Gesture {
    let dx = start.x - end.x;
    let dx_abs = dx.abs();
    let dy_abs = (start.y - end.y).abs();

    if dy_abs > thresholds.vertical && dy_abs > dx_abs {
        Gesture::Scroll
    } else if dx > thresholds.horizontal {
        Gesture::SwipeLeft
    } else if dx < -thresholds.horizontal {
        Gesture::SwipeRight
    } else {
        Gesture::NoOp
    }
}

/// Records the samples of the interaction in progress
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    thresholds: GestureThresholds,
    start: Option<Point>,
    latest: Option<Point>,
}

impl GestureTracker {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            start: None,
            latest: None,
        }
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    /// Begin a new interaction, discarding samples from the previous one
    pub fn start(&mut self, point: Point) {
        self.start = Some(point);
        self.latest = None;
    }

    pub fn move_to(&mut self, point: Point) {
        self.latest = Some(point);
    }

    pub fn end(&mut self) -> Gesture {
        match (self.start, self.latest) {
            (Some(start), Some(latest)) => classify(start, latest, &self.thresholds),
            _ => Gesture::NoOp,
        }
    }
}
