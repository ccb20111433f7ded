//! Configuration for the flashcard quiz.
//!
//! Read from `config.toml` in the platform config directory. A missing file means defaults.

use crate::models::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_toml_str(&content) {
            Ok(config) => {
                log::info!("Loaded config from '{}'", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed config '{}': {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "flashcard-quiz")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// JSON deck to quiz on instead of the built-in one.
    #[serde(default)]
    pub deck_path: Option<PathBuf>,
}

fn default_max_attempts() -> u32 { DEFAULT_MAX_ATTEMPTS }

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            deck_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_feedback_duration")]
    pub feedback_duration_ms: u64,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_feedback_duration() -> u64 { 4000 }
fn default_window_width() -> f32 { 500.0 }
fn default_window_height() -> f32 { 700.0 }

impl DisplayConfig {
    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_duration_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            feedback_duration_ms: default_feedback_duration(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}
