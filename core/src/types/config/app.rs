use crate::types::field::FieldName;
use crate::types::matching::{CaseMatching, MatchMode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Largest accepted debounce delay, in milliseconds.
pub const MAX_DELAY_MS: u64 = 10_000;

/// User-facing configuration, persisted as sift.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
}

impl AppConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("sift.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.delay_ms > MAX_DELAY_MS {
            errors.push(format!("delay_ms must be at most {MAX_DELAY_MS}"));
        }

        for key in &self.search.keys {
            if FieldName::try_new(key.clone()).is_err() {
                errors.push(format!("invalid search key: {key:?}"));
            }
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    ///
    /// Invalid keys are dropped individually. An empty key list stays empty.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            search: SearchSettings {
                delay_ms: if self.search.delay_ms > MAX_DELAY_MS {
                    defaults.search.delay_ms
                } else {
                    self.search.delay_ms
                },
                keys: self
                    .search
                    .keys
                    .iter()
                    .filter(|key| FieldName::try_new((*key).clone()).is_ok())
                    .cloned()
                    .collect(),
                case_matching: self.search.case_matching,
                mode: self.search.mode,
            },
        }
    }
}

/// Search pipeline settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Quiet period before a typed query is applied.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Record fields inspected by the filter.
    #[serde(default = "default_keys")]
    pub keys: Vec<String>,
    #[serde(default)]
    pub case_matching: CaseMatching,
    #[serde(default)]
    pub mode: MatchMode,
}

impl SearchSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            keys: default_keys(),
            case_matching: CaseMatching::default(),
            mode: MatchMode::default(),
        }
    }
}

fn default_delay_ms() -> u64 {
    300
}

fn default_keys() -> Vec<String> {
    vec!["title".to_string(), "name".to_string()]
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
