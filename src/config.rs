//! Runtime configuration for the task synchronisation stack.
//!
//! Configuration is read from an optional JSON file and then overridden by
//! environment variables:
//!
//! - `TODO_SYNC_CONFIG` - Optional. Path to a JSON file holding a
//!   [`SyncConfig`].
//! - `TODO_SYNC_DATABASE_URL` - Optional. Local `SQLite` database. Defaults to
//!   `todo_sync.db`.
//! - `TODO_SYNC_REMOTE_LATENCY_MS` - Optional. Simulated remote latency.
//!   Defaults to `0`.
//! - `TODO_SYNC_POOL_SIZE` - Optional. Local connection pool size. Defaults
//!   to `4`.
//!
//! A representative file is:
//!
//! ```json
//! {
//!   "database_url": "/var/lib/todo/tasks.db",
//!   "remote_latency_ms": 2000,
//!   "seed_tasks": [
//!     { "title": "Build tower in Pisa", "description": "Ground looks good" }
//!   ]
//! }
//! ```

use crate::task::{adapters::memory::SEEDED_TASKS, domain::Task};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "TODO_SYNC_CONFIG";
/// Environment variable overriding [`SyncConfig::database_url`].
pub const DATABASE_URL_ENV: &str = "TODO_SYNC_DATABASE_URL";
/// Environment variable overriding [`SyncConfig::remote_latency_ms`].
pub const REMOTE_LATENCY_ENV: &str = "TODO_SYNC_REMOTE_LATENCY_MS";
/// Environment variable overriding [`SyncConfig::pool_size`].
pub const POOL_SIZE_ENV: &str = "TODO_SYNC_POOL_SIZE";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`SyncConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A setting holds an unusable value.
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Setting name.
        key: String,
        /// Rejected value.
        value: String,
    },
}

/// Settings used to assemble the remote and local tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Local `SQLite` database URL or path.
    pub database_url: String,
    /// Delay applied to every simulated remote call, in milliseconds.
    pub remote_latency_ms: u64,
    /// Maximum number of pooled local connections.
    pub pool_size: u32,
    /// Tasks the simulated remote tier starts with.
    pub seed_tasks: Vec<Task>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            database_url: "todo_sync.db".to_owned(),
            remote_latency_ms: 0,
            pool_size: 4,
            seed_tasks: SEEDED_TASKS
                .iter()
                .map(|(title, description)| Task::new(*title, *description))
                .collect(),
        }
    }
}

impl SyncConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file named by `TODO_SYNC_CONFIG`
    /// cannot be read or parsed, or an override is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` to resolve environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration file cannot be read or
    /// parsed, or an override is invalid.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the simulated remote latency, or `None` when disabled.
    #[must_use]
    pub const fn remote_latency(&self) -> Option<Duration> {
        if self.remote_latency_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.remote_latency_ms))
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database_url = url;
        }
        if let Some(raw) = lookup(REMOTE_LATENCY_ENV) {
            self.remote_latency_ms = parse_setting(REMOTE_LATENCY_ENV, &raw)?;
        }
        if let Some(raw) = lookup(POOL_SIZE_ENV) {
            self.pool_size = parse_setting(POOL_SIZE_ENV, &raw)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "database_url".to_owned(),
                value: self.database_url.clone(),
            });
        }
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "pool_size".to_owned(),
                value: self.pool_size.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_setting<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_owned(),
        value: raw.to_owned(),
    })
}
