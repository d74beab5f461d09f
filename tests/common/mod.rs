//! Shared test utilities for grammar-deck
//!
//! Integration tests run the real binary against a grammar point file,
//! config file and state file inside a temporary directory.

pub mod assertions;
pub mod fixtures;
