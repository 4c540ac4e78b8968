//! Configuration module for the fitness tracker.
//!
//! Structured configuration loaded from environment variables (a `.env`
//! file is honoured by the binary), organized by concern: Storage and Logging.

mod logging_config;
mod storage_config;

pub use logging_config::LoggingEnvConfig;
pub use storage_config::StorageEnvConfig;

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub storage: StorageEnvConfig,
    pub logging: LoggingEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like `from_env`, but an explicit roster path skips the storage
    /// variables entirely, so no home directory is needed.
    pub fn from_env_with_data_file(data_file: Option<PathBuf>) -> Result<Self> {
        Self::from_lookup_with_data_file(|key| env::var(key).ok(), data_file)
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Self::from_lookup_with_data_file(lookup, None)
    }

    pub fn from_lookup_with_data_file(
        lookup: impl Fn(&str) -> Option<String>,
        data_file: Option<PathBuf>,
    ) -> Result<Self> {
        let storage = match data_file {
            Some(data_file) => StorageEnvConfig { data_file },
            None => StorageEnvConfig::from_lookup(&lookup)?,
        };
        Ok(Self {
            storage,
            logging: LoggingEnvConfig::from_lookup(&lookup)?,
        })
    }
}
