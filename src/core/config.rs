use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::error::{DeckError, Result};
use crate::core::gesture::GestureThresholds;
use crate::core::position::DEFAULT_SESSION_KEY;

const DEFAULT_DATA_PATH: &str = "output/grammar_points.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Grammar point collection to load
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// State file holding the last position; the cache directory when unset
    #[serde(default)]
    pub state_file: Option<PathBuf>,
    #[serde(default = "default_session_key")]
    pub session_key: String,
    #[serde(default)]
    pub gestures: GestureThresholds,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            state_file: None,
            session_key: default_session_key(),
            gestures: GestureThresholds::default(),
        }
    }
}

impl ViewerConfig {
    /// Load the config at `path`, writing the defaults there on first use
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| DeckError::config_parse_failed(path, e))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                // A read-only config dir must not stop the viewer
                log::warn!("Could not write default config to {}: {e}", path.display());
            }
            Ok(config)
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.gestures.horizontal.is_nan() || self.gestures.horizontal < 0.0 {
            return Err(DeckError::invalid_config(
                "horizontal swipe threshold must be a non-negative number",
            ));
        }
        if self.gestures.vertical.is_nan() || self.gestures.vertical < 0.0 {
            return Err(DeckError::invalid_config(
                "vertical scroll threshold must be a non-negative number",
            ));
        }
        if self.session_key.trim().is_empty() {
            return Err(DeckError::invalid_config("session key must not be empty"));
        }
        Ok(())
    }
}
