//! Centralized viewer initialization for all commands.
//!
//! Every command needs the same setup: resolve the configuration, apply
//! command line overrides, open the position store and build the [`Viewer`].
//! [`ViewerInit`] does that in one place.
//!
//! # Initialization Steps
//! 1. **Configuration**: Load (or create) the config file
//! 2. **Overrides**: Apply `--data`, `--state-file`, thresholds and seed
//! 3. **Store**: Open the state file, falling back to the cache directory
//! 4. **Viewer**: Read the stored position, load the collection, build the deck

use crate::core::{
    config::ViewerConfig,
    dirs::{default_config_file, default_state_file},
    error::Result,
    position::FileStore,
    selector::ExampleSelector,
    viewer::Viewer,
};
use std::path::PathBuf;

/// Command line overrides shared by every command
#[derive(Debug, Clone, Default)]
pub struct ViewerOptions {
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
    pub swipe_threshold: Option<f64>,
    pub scroll_threshold: Option<f64>,
    pub seed: Option<u64>,
}

pub struct ViewerInit;

impl ViewerInit {
    /// Resolve the effective configuration
    pub fn resolve_config(options: &ViewerOptions) -> Result<ViewerConfig> {
        let config_path = match &options.config {
            Some(path) => path.clone(),
            None => default_config_file()?,
        };
        log::debug!("Using config file: {}", config_path.display());

        let mut config = ViewerConfig::load_or_create(&config_path)?;

        if let Some(data) = &options.data {
            config.data_path = data.clone();
        }
        if let Some(state_file) = &options.state_file {
            config.state_file = Some(state_file.clone());
        }
        if let Some(horizontal) = options.swipe_threshold {
            config.gestures.horizontal = horizontal;
        }
        if let Some(vertical) = options.scroll_threshold {
            config.gestures.vertical = vertical;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build a ready-to-use viewer
    pub fn initialize(options: &ViewerOptions) -> Result<Viewer> {
        let config = Self::resolve_config(options)?;

        let state_path = match &config.state_file {
            Some(path) => path.clone(),
            None => default_state_file()?,
        };
        log::debug!("Using state file: {}", state_path.display());
        let store = FileStore::open(state_path);

        let selector = match options.seed {
            Some(seed) => ExampleSelector::seeded(seed),
            None => ExampleSelector::from_entropy(),
        };

        let viewer = Viewer::open(&config, Box::new(store), selector);
        log::debug!(
            "Viewer initialized with {} grammar points",
            viewer.deck().map_or(0, |deck| deck.len())
        );
        Ok(viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DeckError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_replace_config_values() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let options = ViewerOptions {
            config: Some(temp_dir.path().join("config.json")),
            data: Some(temp_dir.path().join("points.json")),
            state_file: Some(temp_dir.path().join("state.json")),
            swipe_threshold: Some(80.0),
            scroll_threshold: Some(25.0),
            seed: None,
        };

        let config = ViewerInit::resolve_config(&options)?;
        assert_eq!(config.data_path, temp_dir.path().join("points.json"));
        assert_eq!(config.state_file, Some(temp_dir.path().join("state.json")));
        assert_eq!(config.gestures.horizontal, 80.0);
        assert_eq!(config.gestures.vertical, 25.0);
        Ok(())
    }

    #[test]
    fn test_invalid_override_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let options = ViewerOptions {
            config: Some(temp_dir.path().join("config.json")),
            swipe_threshold: Some(-5.0),
            ..Default::default()
        };

        let result = ViewerInit::resolve_config(&options);
        assert!(matches!(result, Err(DeckError::InvalidConfig { .. })));
    }

    #[test]
    fn test_initialize_with_missing_data_still_builds_viewer() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let options = ViewerOptions {
            config: Some(temp_dir.path().join("config.json")),
            data: Some(temp_dir.path().join("missing.json")),
            state_file: Some(temp_dir.path().join("state.json")),
            seed: Some(1),
            ..Default::default()
        };

        let viewer = ViewerInit::initialize(&options)?;
        assert!(viewer.deck().is_none());
        Ok(())
    }

    #[test]
    fn test_initialize_loads_deck() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("points.json");
        fs::write(
            &data,
            r#"{"grammar_points": [{"name": "a"}, {"name": "b"}]}"#,
        )?;

        let options = ViewerOptions {
            config: Some(temp_dir.path().join("config.json")),
            data: Some(data),
            state_file: Some(temp_dir.path().join("state.json")),
            seed: Some(1),
            ..Default::default()
        };

        let viewer = ViewerInit::initialize(&options)?;
        assert_eq!(viewer.deck().map(|deck| deck.len()), Some(2));
        Ok(())
    }
}
