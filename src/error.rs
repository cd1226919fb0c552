//! Error types for emotiq

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for emotiq application
#[derive(Debug, Error)]
pub enum EmotiqError {
    #[error("Not an emotiq directory: {0}")]
    NotEmotiqDirectory(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to read stored data: {0}")]
    PersistenceRead(String),

    #[error("Failed to write stored data: {0}")]
    PersistenceWrite(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EmotiqError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EmotiqError::NotEmotiqDirectory(_) => 2,
            EmotiqError::Validation(_) => 3,
            EmotiqError::PersistenceRead(_) => 4,
            EmotiqError::PersistenceWrite(_) => 5,
            EmotiqError::Auth(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            EmotiqError::NotEmotiqDirectory(path) => {
                format!(
                    "Not an emotiq directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'emotiq init' in this directory to create a new journal\n\
                    • Navigate to an existing emotiq directory\n\
                    • Set EMOTIQ_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            EmotiqError::Validation(msg) => {
                if msg.contains("mood score") {
                    format!(
                        "{}\n\n\
                        Mood scores range from 1 (most negative) to 5 (most positive)\n\
                        Example: emotiq log --mood 4 --text \"Good day\"",
                        msg
                    )
                } else if msg.contains("date range") {
                    format!(
                        "{}\n\n\
                        Valid date ranges: all, week, month\n\
                        Example: emotiq history --range week",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            EmotiqError::PersistenceRead(msg) => {
                format!(
                    "Failed to load your mood data: {}\n\n\
                    Suggestions:\n\
                    • Check that .emotiq/entries.json contains a valid JSON array\n\
                    • Restore the file from a backup if it was edited by hand",
                    msg
                )
            }
            EmotiqError::PersistenceWrite(msg) => {
                format!(
                    "Failed to save data: {}\n\n\
                    Suggestions:\n\
                    • Check free disk space\n\
                    • Check write permissions on the .emotiq directory",
                    msg
                )
            }
            EmotiqError::Auth(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Sign in: emotiq login --email you@example.com --password secret\n\
                    • Create an account: emotiq signup --name \"Your Name\" --email you@example.com --password secret",
                    msg
                )
            }
            EmotiqError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: emotiq config recent_count 5",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using EmotiqError
pub type Result<T> = std::result::Result<T, EmotiqError>;
