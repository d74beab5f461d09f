//! Color system for card rendering.
//!
//! Level badges, highlighted grammar spans and hidden translations all take
//! their styling from here so the card and the detail list stay consistent.
//!
//! # Public API
//! - [`get_level_color_style`]: Get color function for a difficulty level
//! - [`get_level_badge`]: Bracketed, colored level label
//! - [`format_highlight`]: Sentence with the grammar span emphasized
//! - [`format_translation`]: Translation, dimmed until revealed
//!
//! # Color Scheme
//! - **Basic**: Green
//! - **Intermediate**: Cyan
//! - **Advanced**: Red
//! - **Unknown**: Bright black
//! - **Highlighted span**: Blue bold

use crate::core::{highlight::Highlight, level::Level};
use colored::*;

/// Returns a closure that applies the level's color to any text
pub fn get_level_color_style(level: Level) -> Box<dyn Fn(&str) -> ColoredString> {
    match level {
        Level::Basic => Box::new(|text: &str| text.green()),
        Level::Intermediate => Box::new(|text: &str| text.cyan()),
        Level::Advanced => Box::new(|text: &str| text.red()),
        Level::Unknown => Box::new(|text: &str| text.bright_black()),
    }
}

/// Level label in brackets, e.g. `[Basic]`
pub fn get_level_badge(level: Level) -> ColoredString {
    let color_fn = get_level_color_style(level);
    color_fn(&format!("[{}]", level.label()))
}

pub fn format_highlight(highlight: &Highlight) -> String {
    match *highlight {
        Highlight::Plain(text) => text.to_string(),
        Highlight::Segmented {
            before,
            highlighted,
            after,
        } => format!("{before}{}{after}", highlighted.blue().bold()),
    }
}

/// Hidden translations are dimmed, the terminal stand-in for a blur
pub fn format_translation(text: &str, revealed: bool) -> ColoredString {
    if revealed {
        text.white()
    } else {
        text.bright_black().dimmed()
    }
}
