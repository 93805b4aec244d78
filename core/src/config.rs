//! Loading and saving the overlay configuration
//!
//! The config is a single TOML file. Missing fields fall back to defaults,
//! so a file containing only `attach_to_player = true` is valid.

use std::fs;
use std::path::{Path, PathBuf};

use xpdrops_types::XpDropsConfig;

use crate::skills::Skill;

/// Errors raised while loading configuration or validating static tables
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("icon table is missing skills: {missing:?}")]
    IncompleteIconTable { missing: Vec<Skill> },
    #[error("icon table lists {skill} more than once")]
    DuplicateIcon { skill: Skill },
}

/// Load a config from a TOML file
pub fn load_file(path: &Path) -> Result<XpDropsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config if the file exists, defaults otherwise
pub fn load_or_default(path: &Path) -> Result<XpDropsConfig, ConfigError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "No config file, using defaults");
        return Ok(XpDropsConfig::default());
    }
    let config = load_file(path)?;
    tracing::info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Save a config to a TOML file, creating parent directories
pub fn save_file(path: &Path, config: &XpDropsConfig) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "Saved config");
    Ok(())
}

/// Get the default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("xpdrops").join("config.toml"))
}
