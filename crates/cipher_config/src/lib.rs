//! Configuration for the calendar-cipher tools.
//!
//! Settings come from a JSON file (default `~/.cipher/config.json`), then
//! `CIPHER_*` environment variables override individual fields. A missing
//! file is not an error; every field has a default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Overrides `data_dir`.
pub const ENV_DATA_DIR: &str = "CIPHER_DATA_DIR";
/// Overrides `log_filter`.
pub const ENV_LOG: &str = "CIPHER_LOG";
/// Overrides `output` (`text` or `json`).
pub const ENV_OUTPUT: &str = "CIPHER_OUTPUT";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_OUTPUT,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Root of the JSON-file store.
    pub data_dir: PathBuf,
    /// `tracing` filter directive, e.g. `info` or `cipher_report=debug`.
    pub log_filter: String,
    pub output: OutputFormat,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            data_dir: base_dir().join("data"),
            log_filter: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}

/// `~/.cipher`, or `./.cipher` when no home directory is known.
pub fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cipher")
}

/// Default config file location.
pub fn default_config_path() -> PathBuf {
    base_dir().join("config.json")
}

impl CipherConfig {
    /// Load from `path`, or from [`default_config_path`] when `None`.
    ///
    /// An explicit path must exist; the default path may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path(), false),
        };
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        let config: Self = serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply `CIPHER_*` overrides from the process environment.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production).
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log_filter = filter;
        }
        if let Some(output) = lookup(ENV_OUTPUT).filter(|v| !v.is_empty()) {
            self.output = output.parse()?;
        }
        Ok(self)
    }
}
