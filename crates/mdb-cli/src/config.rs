//! Catalog configuration: a small JSON file naming the object-store
//! backend.
//!
//! Default location: `~/.mediadb/config`. The `MEDIA_DB_CONFIG_FILE`
//! environment variable overrides it. The catalog core only consumes the
//! bucket identifier; profile and region are carried for backends that
//! need them.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_FILE_ENV: &str = "MEDIA_DB_CONFIG_FILE";

/// Environment variable overriding the local data directory.
pub const DATA_DIR_ENV: &str = "MEDIA_DB_DATA_DIR";

/// The profile, region, and bucket to use for the catalog's object store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDbConfig {
    pub profile: String,
    pub region: String,
    pub bucket: String,
}

impl MediaDbConfig {
    /// Validate raw values and build a config. Every field must be
    /// non-empty after trimming; trimmed values are stored.
    pub fn new(profile: &str, region: &str, bucket: &str) -> Result<Self> {
        let config = Self {
            profile: profile.trim().to_string(),
            region: region.trim().to_string(),
            bucket: bucket.trim().to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.profile.trim().is_empty() {
            bail!("profile must not be empty");
        }
        if self.region.trim().is_empty() {
            bail!("region must not be empty");
        }
        if self.bucket.trim().is_empty() {
            bail!("bucket must not be empty");
        }
        Ok(())
    }

    /// Load the config from the current config file location.
    pub fn load() -> Result<Self> {
        Self::load_from(&current_config_file())
    }

    /// Load and validate a config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to the current config file location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&current_config_file())
    }

    /// Save the config to an explicit path, atomically (write a temp file
    /// beside the target, then rename over it).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let data = serde_json::to_vec_pretty(self).context("failed to serialize config")?;
        let staging = path.with_extension("tmp");
        fs::write(&staging, data)
            .with_context(|| format!("failed to write {}", staging.display()))?;
        fs::rename(&staging, path)
            .with_context(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }

    /// The local data directory backing this bucket.
    pub fn data_root(&self) -> PathBuf {
        let base = env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_mediadb_dir().join("data"));
        base.join(&self.bucket)
    }
}

/// The default config file path: `~/.mediadb/config`.
pub fn default_config_file() -> PathBuf {
    default_mediadb_dir().join("config")
}

/// The config file currently in effect, honoring the env override.
pub fn current_config_file() -> PathBuf {
    match env::var(CONFIG_FILE_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => default_config_file(),
    }
}

fn default_mediadb_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".mediadb"))
        .unwrap_or_else(|| PathBuf::from(".mediadb"))
}
