//! Configuration handling for the quiz

use crate::platform::Platform;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, stored as JSON in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QuizConfig {
    /// Keyboard convention to quiz on; detected when unset
    pub platform: Option<Platform>,
    /// Question file to use instead of the built-in set
    pub questions_path: Option<PathBuf>,
    /// Ask questions in random order (default true)
    pub shuffle: Option<bool>,
    /// Ask at most this many questions per test
    pub question_limit: Option<usize>,
}

impl QuizConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "shortcut-quiz", "shortcut-quiz")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: QuizConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from `path` for an app that may save it back
    ///
    /// An unreadable file falls back to the defaults and no save path is
    /// returned, so the user's file is never overwritten.
    pub fn load_for_saving(path: Option<PathBuf>) -> (Self, Option<PathBuf>) {
        let Some(path) = path else {
            return (Self::default(), None);
        };
        match Self::load_from(&path) {
            Ok(config) => (config, Some(path)),
            Err(err) => {
                tracing::warn!(
                    "Ignoring unreadable config {}, settings will not be saved: {err:#}",
                    path.display()
                );
                (Self::default(), None)
            }
        }
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle.unwrap_or(true)
    }
}
