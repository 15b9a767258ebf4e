//! Configuration file loading.
//!
//! The file is TOML with a single `[resolver]` table:
//!
//! ```toml
//! [resolver]
//! tie_break = "storage-order"
//! occupancy = "truncated"
//! on_failure = "advance-turn"
//! ```

use pawn_engine::ResolverOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`ReplayConfig`].
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReplayConfig {
    #[serde(default)]
    pub resolver: ResolverOptions,
}

impl ReplayConfig {
    /// Loads configuration from `path`, or from [`Self::default_path`] when
    /// no path is given.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_path(), false),
        };
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// `pawn.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("pawn.toml")
    }
}
