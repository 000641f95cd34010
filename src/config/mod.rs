// src/config/mod.rs

use crate::app::search::NgramWalk;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result limit outside extended mode.
pub const DEFAULT_LIMIT: usize = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    // ── Search
    pub default_limit: usize,
    pub extended: bool,
    pub show_relevance: bool,
    pub ngram_walk: NgramWalk,
    pub terms_file: Option<PathBuf>,

    // ── Event loop
    pub debounce_ms: u64,
    pub tick_ms: u64,

    // ── Logging
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            extended: false,
            show_relevance: false,
            ngram_walk: NgramWalk::Stepped,
            terms_file: None,
            debounce_ms: 0,
            tick_ms: 60,
            log_file: None,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// `<config_dir>/fruit-suggest/config.toml`, when a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fruit-suggest").join("config.toml"))
    }

    /// Loads `explicit` (which must exist), else the default path if present,
    /// else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let shown = path.display().to_string();
        let body = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: shown.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&body).map_err(|source| ConfigError::Parse {
            path: shown.clone(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::Invalid("default_limit must be greater than 0".into()));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be greater than 0".into()));
        }
        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Invalid(format!("unknown log_level '{}'", self.log_level)));
        }
        Ok(())
    }
}
