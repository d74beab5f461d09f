//! Positional navigation over a fixed-size collection.
//!
//! [`Navigator`] owns the current index and the collection length and knows
//! nothing else. Each operation returns the new index when it succeeded so the
//! caller can run its activation step; `None` means nothing changed.

use crate::core::jump_parser::JumpParser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    len: usize,
}

impl Navigator {
    /// Create a navigator, clamping `start` into `[0, len)`
    pub fn new(len: usize, start: usize) -> Self {
        let index = if len == 0 { 0 } else { start.min(len - 1) };
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 1-based position for display
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Advance one entry, wrapping from the last to the first
    pub fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Go back one entry, wrapping from the first to the last
    pub fn previous(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }

    /// Jump to a user-entered 1-based number; invalid input leaves the index as is
    pub fn jump_to(&mut self, input: &str) -> Option<usize> {
        let target = JumpParser::resolve(input, self.len)?;
        self.index = target;
        Some(self.index)
    }
}
