//! Log level from environment variables.

use anyhow::{Result, anyhow};
use std::str::FromStr;
use tracing::Level;

/// Logging environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingEnvConfig {
    /// Default directive; `RUST_LOG` still overrides it
    pub level: Level,
}

impl Default for LoggingEnvConfig {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl LoggingEnvConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        match lookup("FITNESS_LOG_LEVEL") {
            Some(raw) => {
                let level = Level::from_str(raw.trim()).map_err(|_| {
                    anyhow!(
                        "Invalid FITNESS_LOG_LEVEL: {}. Must be one of trace, debug, info, warn, error",
                        raw
                    )
                })?;
                Ok(Self { level })
            }
            None => Ok(Self::default()),
        }
    }
}
