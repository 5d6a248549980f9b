use std::env;

use serde::{Deserialize, Serialize};

use self::normalizer::NormalizerConfig;
use self::phrasebook::PhrasebookConfig;
use self::search::SearchConfig;

pub mod normalizer;
pub mod phrasebook;
pub mod search;

pub use normalizer::DiacriticPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown config field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub phrasebook: PhrasebookConfig,
    pub normalizer: NormalizerConfig,
    pub search: SearchConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        config.apply_overrides(lookup);
        config
    }

    /// Apply `NAFHAM_*` overrides on top of the current values.
    /// Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(limit) = lookup("NAFHAM_PREVIEW_LIMIT").and_then(|v| v.parse().ok()) {
            self.search.preview_limit = limit;
        }

        if let Some(direction) = lookup("NAFHAM_DIRECTION").and_then(|v| v.parse().ok()) {
            self.search.default_direction = direction;
        }

        if let Some(policy) = lookup("NAFHAM_DIACRITICS").and_then(|v| v.parse().ok()) {
            self.normalizer.diacritics = policy;
        }

        // platform path list, like PATH
        if let Some(paths) = lookup("NAFHAM_PHRASES") {
            self.phrasebook.additional_paths.extend(
                env::split_paths(&paths)
                    .map(|p| p.to_string_lossy().trim().to_string())
                    .filter(|p| !p.is_empty()),
            );
        }
    }

    /// Update a single runtime-tunable field by name
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        };

        match field {
            "diacritics" => self.normalizer.diacritics = value.parse().map_err(|_| invalid())?,
            "preview_limit" => self.search.preview_limit = value.parse().map_err(|_| invalid())?,
            "direction" => self.search.default_direction = value.parse().map_err(|_| invalid())?,
            other => return Err(ConfigError::UnknownField(other.to_string())),
        }

        Ok(())
    }
}
