use std::path::PathBuf;
use crate::core::error::DeckError;

const APP_DIR: &str = "grammar-deck";

pub fn get_config_directory() -> Result<PathBuf, DeckError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => {
            match std::env::var("XDG_CONFIG_HOME") {
                Ok(path) => PathBuf::from(path),
                Err(_) => dirs::home_dir()
                    .ok_or(DeckError::ConfigDirectoryNotFound)?
                    .join(".config"),
            }
        },
        "macos" => {
            dirs::home_dir()
                .ok_or(DeckError::ConfigDirectoryNotFound)?
                .join("Library/Application Support")
        },
        _ => dirs::config_dir().ok_or(DeckError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}

pub fn get_cache_directory() -> Result<PathBuf, DeckError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => {
            match std::env::var("XDG_CACHE_HOME") {
                Ok(path) => PathBuf::from(path),
                Err(_) => dirs::home_dir()
                    .ok_or(DeckError::CacheDirectoryNotFound)?
                    .join(".cache"),
            }
        },
        "macos" => {
            dirs::home_dir()
                .ok_or(DeckError::CacheDirectoryNotFound)?
                .join("Library/Caches")
        },
        _ => dirs::cache_dir().ok_or(DeckError::CacheDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}

/// Default location of the persisted position file
pub fn default_state_file() -> Result<PathBuf, DeckError> {
    Ok(get_cache_directory()?.join("state.json"))
}

/// Default location of the config file
pub fn default_config_file() -> Result<PathBuf, DeckError> {
    Ok(get_config_directory()?.join("config.json"))
}
