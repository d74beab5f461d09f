//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating grammar-deck screens and error
//! messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks the "n / total" card header
pub fn shows_position(position: usize, total: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Grammar Point {position} / {total}"))
}

/// Creates a predicate that checks for the load failure screen
pub fn load_failed() -> impl Predicate<str> {
    predicates::str::contains("Could not load grammar points")
}

/// Creates a predicate that checks for the empty collection screen
pub fn empty_collection() -> impl Predicate<str> {
    predicates::str::contains("No grammar points available.")
}

/// Creates a predicate that checks for the session usage block
pub fn has_usage() -> impl Predicate<str> {
    predicates::str::contains("Usage:")
}

/// Creates a predicate that checks for the details section
pub fn details_visible() -> impl Predicate<str> {
    predicates::str::contains("Hide Details").and(predicates::str::contains("Romaji:"))
}
