//! Grammar point collection and its JSON loader.
//!
//! The collection is read once at startup and never mutated afterwards. The
//! on-disk shape is `{ "grammar_points": [...] }`; examples may live either
//! under `details.examples` (as the scraper writes them) or in a flat
//! `examples` array.
//!
//! # Public API
//! - [`Example`]: One sentence/translation pair with an optional highlight span
//! - [`Entry`]: One grammar point with metadata and examples
//! - [`Collection`]: The ordered, read-only list of entries

use crate::core::{
    error::{DeckError, Result},
    level::Level,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Full sentence in the source language
    #[serde(default)]
    pub japanese: String,
    #[serde(default)]
    pub english: String,
    /// Character offset where the highlighted construct begins
    #[serde(default)]
    pub grammar_point_index: Option<usize>,
    /// Highlighted construct; only its length is used
    #[serde(default)]
    pub grammar_point: Option<String>,
}

impl Example {
    /// Length of the highlighted span in characters
    pub fn span_len(&self) -> usize {
        self.grammar_point
            .as_deref()
            .map_or(0, |point| point.chars().count())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct Entry {
    pub id: Option<String>,
    pub order: Option<String>,
    pub name: String,
    pub romaji: String,
    pub meaning: String,
    pub level: Level,
    pub equivalent: String,
    pub reference: String,
    pub examples: Vec<Example>,
}

impl Entry {
    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawDetails {
    #[serde(default)]
    examples: Vec<Example>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    order: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    romaji: String,
    #[serde(default)]
    meaning: String,
    #[serde(default)]
    level: Level,
    #[serde(default)]
    equivalent: String,
    #[serde(default)]
    reference: String,
    #[serde(default)]
    details: Option<RawDetails>,
    #[serde(default)]
    examples: Vec<Example>,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        let mut examples = raw.details.map(|d| d.examples).unwrap_or_default();
        examples.extend(raw.examples);

        Self {
            id: raw.id.filter(|id| !id.is_empty()),
            order: raw.order.filter(|order| !order.is_empty()),
            name: raw.name,
            romaji: raw.romaji,
            meaning: raw.meaning,
            level: raw.level,
            equivalent: raw.equivalent,
            reference: raw.reference,
            examples,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "grammar_points", default)]
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Read and parse a collection file
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading grammar points from {}", path.display());

        if !path.exists() {
            return Err(DeckError::data_file_not_found(path));
        }

        let content =
            fs::read_to_string(path).map_err(|e| DeckError::data_read_failed(path, e))?;
        let collection = Self::from_json(&content).map_err(|e| match e {
            DeckError::Json(source) => DeckError::data_parse_failed(path, source),
            other => other,
        })?;

        log::debug!("Loaded {} grammar points", collection.len());
        Ok(collection)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
