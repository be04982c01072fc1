//! # idstore-config
//!
//! Configuration management for idstore.
//!
//! Loads configuration from (later layers win):
//! 1. Built-in defaults
//! 2. `~/.idstore/config.toml` (global)
//! 3. `.idstore/config.toml` (project-local)
//! 4. An explicit file passed by the caller
//! 5. Environment variables (highest priority)
//!
//! File layers are partial: only the keys they set override earlier layers.

pub mod logging;
pub mod path;
pub mod testing;

use std::path::{Path, PathBuf};

use idstore_core::{StoreConfig, DEFAULT_CHUNK_SIZE, DEFAULT_EXTENSION, DEFAULT_ID_PATTERN};
use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Default store root, `~` expanded at load time.
pub const DEFAULT_STORE_ROOT: &str = "~/.idstore/store";

pub const ENV_ROOT: &str = "IDSTORE_ROOT";
pub const ENV_ID_PATTERN: &str = "IDSTORE_ID_PATTERN";
pub const ENV_CHUNK_SIZE: &str = "IDSTORE_CHUNK_SIZE";
pub const ENV_EXTENSION: &str = "IDSTORE_EXTENSION";
pub const ENV_ENFORCE_IDS: &str = "IDSTORE_ENFORCE_IDS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreSection,
    pub log: LogSection,
}

/// `[store]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Root directory all items live under
    pub root: PathBuf,
    /// Pattern a valid ID must fully match
    pub id_pattern: String,
    /// ID characters per directory level
    pub chunk_size: usize,
    /// Suffix of every item file
    pub extension: String,
    /// Reject invalid IDs in every operation
    pub enforce_valid_ids: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_STORE_ROOT),
            id_pattern: DEFAULT_ID_PATTERN.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            extension: DEFAULT_EXTENSION.to_string(),
            enforce_valid_ids: false,
        }
    }
}

/// `[log]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// error, warn, info, debug or trace
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// A partial config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    store: StoreLayer,
    log: LogLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoreLayer {
    root: Option<PathBuf>,
    id_pattern: Option<String>,
    chunk_size: Option<usize>,
    extension: Option<String>,
    enforce_valid_ids: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogLayer {
    level: Option<String>,
}

/// Where [`Config::load_from`] looks for configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub explicit: Option<PathBuf>,
    pub use_env: bool,
}

impl ConfigSources {
    /// Global and project files at their standard locations, plus env vars.
    pub fn standard() -> Self {
        Self {
            global: Config::global_config_path(),
            project: Some(Config::project_config_path()),
            explicit: None,
            use_env: true,
        }
    }

    pub fn with_explicit(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }
}

impl Config {
    /// Load config from standard locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&ConfigSources::standard())
    }

    /// Load config from the given sources.
    ///
    /// Missing global and project files are skipped; a missing explicit
    /// file is an error.
    pub fn load_from(sources: &ConfigSources) -> Result<Self, ConfigError> {
        Self::load_over(Config::default(), sources)
    }

    /// Like [`Config::load_from`], layering the sources over `base`
    /// instead of the built-in defaults.
    pub fn load_over(base: Config, sources: &ConfigSources) -> Result<Self, ConfigError> {
        let mut config = base;

        for path in [&sources.global, &sources.project].into_iter().flatten() {
            if path.exists() {
                crate::log_config_debug!(
                    "Loading config layer",
                    path = tracing::field::display(path.display())
                );
                config.apply_layer(read_layer(path)?);
            }
        }

        if let Some(path) = &sources.explicit {
            crate::log_config_debug!(
                "Loading explicit config",
                path = tracing::field::display(path.display())
            );
            config.apply_layer(read_layer(path)?);
        }

        if sources.use_env {
            config.apply_env_overrides(|key| std::env::var(key).ok())?;
        }

        config.store.root = path::expand_tilde(&config.store.root);
        config.validate()?;
        Ok(config)
    }

    /// Global config path: ~/.idstore/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".idstore/config.toml"))
    }

    /// Project config path: .idstore/config.toml
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".idstore/config.toml")
    }

    fn apply_layer(&mut self, layer: ConfigLayer) {
        let store = layer.store;
        if let Some(root) = store.root {
            self.store.root = root;
        }
        if let Some(pattern) = store.id_pattern {
            self.store.id_pattern = pattern;
        }
        if let Some(chunk_size) = store.chunk_size {
            self.store.chunk_size = chunk_size;
        }
        if let Some(extension) = store.extension {
            self.store.extension = extension;
        }
        if let Some(enforce) = store.enforce_valid_ids {
            self.store.enforce_valid_ids = enforce;
        }
        if let Some(level) = layer.log.level {
            self.log.level = level;
        }
    }

    /// Apply environment variable overrides, reading values through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(ENV_ROOT) {
            self.store.root = PathBuf::from(root);
        }
        if let Some(pattern) = lookup(ENV_ID_PATTERN) {
            self.store.id_pattern = pattern;
        }
        if let Some(raw) = lookup(ENV_CHUNK_SIZE) {
            self.store.chunk_size = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_CHUNK_SIZE.to_string(),
                value: raw.clone(),
            })?;
        }
        if let Some(extension) = lookup(ENV_EXTENSION) {
            self.store.extension = extension;
        }
        if let Some(raw) = lookup(ENV_ENFORCE_IDS) {
            self.store.enforce_valid_ids = parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                key: ENV_ENFORCE_IDS.to_string(),
                value: raw.clone(),
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.chunk_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "store.chunk_size".to_string(),
                value: "0".to_string(),
            });
        }
        if self.log.level.parse::<LogLevel>().is_err() {
            return Err(ConfigError::InvalidValue {
                key: "log.level".to_string(),
                value: self.log.level.clone(),
            });
        }
        Ok(())
    }

    /// Configured log level. Falls back to warn for unknown names.
    pub fn log_level(&self) -> LogLevel {
        self.log.level.parse().unwrap_or(LogLevel::Warn)
    }

    /// Settings for constructing an [`idstore_core::FileStore`].
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.store.root)
            .with_id_pattern(self.store.id_pattern.clone())
            .with_chunk_size(self.store.chunk_size)
            .with_extension(self.store.extension.clone())
            .with_enforced_ids(self.store.enforce_valid_ids)
    }

    /// Generate default config TOML string
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&Config::default())?)
    }

    /// Render this config as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn read_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
