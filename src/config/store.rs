//! Config snapshot persistence
//!
//! Snapshots live as JSON files under stable keys inside one directory.
//! Reads and writes are atomic, blocking key-value operations as far as
//! callers are concerned; there is no partial-state exposure.
//!
//! A malformed snapshot is discarded with a diagnostic and replaced by
//! defaults; it never aborts engine startup.

use super::FilterConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Stable key for the live config snapshot
const CONFIG_KEY: &str = "filter_config.json";

/// Stable key for the pinned snapshot
const PINNED_KEY: &str = "filter_config.pinned.json";

/// Config persistence errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// A pinned snapshot: the config plus the moment it was saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinnedConfig {
    pub saved_at: DateTime<Utc>,
    pub config: FilterConfig,
}

/// File-backed key-value store for config snapshots
pub struct ConfigStore {
    base_path: PathBuf,
}

impl ConfigStore {
    /// Open (creating if needed) a config store at a directory
    pub fn new(base_path: impl AsRef<Path>) -> ConfigResult<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Persist the live config snapshot
    pub fn save(&self, config: &FilterConfig) -> ConfigResult<()> {
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(self.key_path(CONFIG_KEY), json)?;
        info!("Saved filter config snapshot");
        Ok(())
    }

    /// Load the live config snapshot
    ///
    /// Missing or malformed snapshots yield defaults; only genuine I/O
    /// failures surface as errors.
    pub fn load(&self) -> ConfigResult<FilterConfig> {
        match self.read_key(CONFIG_KEY)? {
            None => Ok(FilterConfig::default()),
            Some(json) => match serde_json::from_str(&json) {
                Ok(config) => Ok(config),
                Err(e) => {
                    warn!("Discarding malformed config snapshot: {}", e);
                    Ok(FilterConfig::default())
                }
            },
        }
    }

    /// Pin the current config with a timestamp, under its own key
    pub fn pin(&self, config: &FilterConfig) -> ConfigResult<PinnedConfig> {
        let pinned = PinnedConfig {
            saved_at: Utc::now(),
            config: config.clone(),
        };
        let json = serde_json::to_string_pretty(&pinned)?;
        std::fs::write(self.key_path(PINNED_KEY), json)?;
        info!("Pinned filter config at {}", pinned.saved_at);
        Ok(pinned)
    }

    /// Load the pinned snapshot, if one exists and parses
    pub fn load_pinned(&self) -> ConfigResult<Option<PinnedConfig>> {
        match self.read_key(PINNED_KEY)? {
            None => Ok(None),
            Some(json) => match serde_json::from_str(&json) {
                Ok(pinned) => Ok(Some(pinned)),
                Err(e) => {
                    warn!("Discarding malformed pinned snapshot: {}", e);
                    Ok(None)
                }
            },
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    fn read_key(&self, key: &str) -> ConfigResult<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }
}
