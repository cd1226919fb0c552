//! Config management use case

use crate::error::{EmotiqError, Result};
use crate::infrastructure::{Config, FileSystemStorage};

const VALID_KEYS: &str = "recent_count, seed_demo, notifications";

/// Service for managing journal configuration
pub struct ConfigService {
    storage: FileSystemStorage,
}

impl ConfigService {
    pub fn new(storage: FileSystemStorage) -> Self {
        ConfigService { storage }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.storage.load_config()?;

        match key {
            "recent_count" => Ok(config.recent_count.to_string()),
            "seed_demo" => Ok(config.seed_demo.to_string()),
            "notifications" => Ok(config.notifications.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.storage.load_config()?;

        match key {
            "recent_count" => {
                config.recent_count = value.parse().map_err(|_| {
                    EmotiqError::Config(format!(
                        "Invalid value for recent_count: '{}'. Expected a non-negative number",
                        value
                    ))
                })?;
            }
            "seed_demo" => config.seed_demo = parse_bool(key, value)?,
            "notifications" => config.notifications = parse_bool(key, value)?,
            _ => return Err(unknown_key(key)),
        }

        self.storage.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.storage.load_config()
    }
}

fn unknown_key(key: &str) -> EmotiqError {
    EmotiqError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(EmotiqError::Config(format!(
            "Invalid value for {}: '{}'. Expected true or false",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorage::new(temp.path().to_path_buf());
        storage.initialize().unwrap();
        storage.save_config(&Config::default()).unwrap();
        (temp, ConfigService::new(storage))
    }

    #[test]
    fn test_get_and_set() {
        let (_temp, service) = service();
        assert_eq!(service.get("recent_count").unwrap(), "3");

        service.set("recent_count", "5").unwrap();
        service.set("notifications", "off").unwrap();

        assert_eq!(service.get("recent_count").unwrap(), "5");
        assert_eq!(service.get("notifications").unwrap(), "false");
        assert!(service.list().unwrap().seed_demo);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let (_temp, service) = service();
        assert!(service.set("recent_count", "-2").is_err());
        assert!(service.set("seed_demo", "maybe").is_err());
        assert_eq!(service.get("recent_count").unwrap(), "3");
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        match service.get("editor") {
            Err(EmotiqError::Config(msg)) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }
}
