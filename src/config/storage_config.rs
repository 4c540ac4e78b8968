//! Roster storage location from environment variables.

use anyhow::{Context, Result};
use std::path::PathBuf;

const DATA_DIR_NAME: &str = ".fitness_tracker";
const DATA_FILE_NAME: &str = "athletes.json";

/// Storage environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StorageEnvConfig {
    pub data_file: PathBuf,
}

impl StorageEnvConfig {
    /// `FITNESS_DATA_FILE`, falling back to `~/.fitness_tracker/athletes.json`
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(path) = lookup("FITNESS_DATA_FILE").filter(|p| !p.trim().is_empty()) {
            return Ok(Self {
                data_file: PathBuf::from(path),
            });
        }

        let home = lookup("HOME")
            .or_else(|| lookup("USERPROFILE"))
            .context("Could not find HOME directory")?;

        Ok(Self {
            data_file: PathBuf::from(home).join(DATA_DIR_NAME).join(DATA_FILE_NAME),
        })
    }
}
