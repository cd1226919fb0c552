//! Configuration management

use crate::error::{EmotiqError, Result};
use crate::infrastructure::storage::DATA_DIR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings stored in `.emotiq/config.toml`. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many entries `recent` and the dashboard show
    pub recent_count: usize,
    /// Seed a fresh journal with demonstration entries
    pub seed_demo: bool,
    /// Print success and info notifications
    pub notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            recent_count: 3,
            seed_demo: true,
            notifications: true,
        }
    }
}

impl Config {
    /// Load config from .emotiq/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let data_dir = path.join(DATA_DIR);
        let config_path = data_dir.join("config.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if data_dir.is_dir() {
                    return Ok(Config::default());
                }
                return Err(EmotiqError::NotEmotiqDirectory(path.to_path_buf()));
            }
            Err(e) => return Err(EmotiqError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| EmotiqError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .emotiq/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| EmotiqError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
