use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::errors::CollectionError;

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "linear-collections.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ring: RingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingConfig {
    /// Number of slots allocated when a ring buffer is created. Zero is allowed;
    /// the first prepend grows it.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_initial_capacity() -> usize { 1 }
fn default_filter() -> String { "warn".to_string() }

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config: Config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                toml::from_str(&content).context("Failed to parse config")?
            }
            None => match std::fs::read_to_string(DEFAULT_CONFIG_FILE) {
                Ok(content) => toml::from_str(&content).with_context(|| {
                    format!("Failed to parse config from {}", DEFAULT_CONFIG_FILE)
                })?,
                Err(_) => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would only fail later, at subscriber install time.
    pub fn validate(&self) -> std::result::Result<(), CollectionError> {
        let filter = self.logging.filter.trim();
        if filter.is_empty() {
            return Err(CollectionError::Config(
                "logging.filter must not be empty".to_string(),
            ));
        }
        EnvFilter::try_new(filter).map_err(|e| {
            CollectionError::Config(format!("invalid logging.filter '{}': {}", filter, e))
        })?;
        Ok(())
    }
}
