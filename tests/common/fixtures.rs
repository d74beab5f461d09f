//! Test data generation utilities and predefined scenarios
//!
//! Provides a temporary workspace with a grammar point collection and a
//! preconfigured command for running the binary against it.

#![allow(dead_code)]

use assert_cmd::Command;
use grammar_deck::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding the data, config and state files
pub struct TestDeck {
    pub dir: TempDir,
}

impl TestDeck {
    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join("grammar_points.json")
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("state").join("state.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    /// Command for the binary with every path pointing into the temp dir
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("grammar-deck")?;
        cmd.env("NO_COLOR", "1")
            .arg("--config")
            .arg(self.config_path())
            .arg("--data")
            .arg(self.data_path())
            .arg("--state-file")
            .arg(self.state_path())
            .arg("--seed")
            .arg("42");
        Ok(cmd)
    }

    /// Raw value stored under the session key, if any
    pub fn stored_position(&self) -> Option<String> {
        let content = fs::read_to_string(self.state_path()).ok()?;
        let json: serde_json::Value = serde_json::from_str(&content).ok()?;
        json["values"]["lastGrammarPoint"]
            .as_str()
            .map(str::to_string)
    }

    pub fn store_position(&self, raw: &str) -> Result<()> {
        let path = self.state_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::json!({
            "values": { "lastGrammarPoint": raw },
            "last_updated": "2024-01-01T00:00:00Z",
        });
        fs::write(path, serde_json::to_string_pretty(&json)?)?;
        Ok(())
    }
}

/// Empty workspace without a data file
pub fn setup_empty_workspace() -> Result<TestDeck> {
    Ok(TestDeck {
        dir: TempDir::new()?,
    })
}

/// Scenario: five grammar points, the first two with examples
pub fn setup_five_point_deck() -> Result<TestDeck> {
    let deck = setup_empty_workspace()?;
    write_collection(&deck.data_path(), &five_points())?;
    Ok(deck)
}

/// Scenario: collection file with no entries
pub fn setup_empty_deck() -> Result<TestDeck> {
    let deck = setup_empty_workspace()?;
    write_collection(&deck.data_path(), &serde_json::json!([]))?;
    Ok(deck)
}

pub fn write_collection(path: &Path, entries: &serde_json::Value) -> Result<()> {
    let json = serde_json::json!({ "grammar_points": entries });
    fs::write(path, serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

fn five_points() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "1",
            "order": "1",
            "name": "〜たい",
            "romaji": "tai",
            "meaning": "want to",
            "level": "B",
            "equivalent": "",
            "reference": "p. 12",
            "details": {
                "examples": [
                    {
                        "japanese": "水を飲みたい。",
                        "english": "I want to drink water.",
                        "grammar_point_index": 4,
                        "grammar_point": "たい"
                    }
                ]
            }
        },
        {
            "name": "〜ながら",
            "romaji": "nagara",
            "meaning": "while",
            "level": "I",
            "details": {
                "examples": [
                    {
                        "japanese": "歩きながら話す。",
                        "english": "Talk while walking.",
                        "grammar_point_index": 2,
                        "grammar_point": "ながら"
                    },
                    {
                        "japanese": "音楽を聞きながら勉強する。",
                        "english": "Study while listening to music.",
                        "grammar_point_index": null,
                        "grammar_point": null
                    }
                ]
            }
        },
        { "name": "〜ば", "romaji": "ba", "meaning": "if", "level": "A" },
        { "name": "〜のに", "romaji": "noni", "meaning": "although", "level": "I" },
        { "name": "〜ように", "romaji": "you ni", "meaning": "so that", "level": "X" }
    ])
}
