//! Random example selection for the compact card view.

use crate::core::collection::{Entry, Example};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Picks one example per entry activation
#[derive(Debug, Clone)]
pub struct ExampleSelector<R: Rng = SmallRng> {
    rng: R,
}

impl ExampleSelector<SmallRng> {
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ExampleSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Index of the chosen example, or `None` when the entry has none
    pub fn select(&mut self, entry: &Entry) -> Option<usize> {
        match entry.examples.len() {
            0 => None,
            1 => Some(0),
            count => Some(self.rng.gen_range(0..count)),
        }
    }

    pub fn select_example<'a>(&mut self, entry: &'a Entry) -> Option<&'a Example> {
        self.select(entry).map(|i| &entry.examples[i])
    }
}
