use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigError;
use super::types::Config;

const CONFIG_DIR: &str = "shell-assist";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration
///
/// An explicit path must exist. The default path is optional: when it is
/// missing, built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidFile {
        path: path.to_path_buf(),
        message,
    };

    let contents = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let config = toml::from_str::<Config>(&contents).map_err(|e| invalid(e.message().to_string()))?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
