//! Engine configuration via `quarry.toml`
//!
//! Every field has a default, so an empty file is a valid configuration.
//! Stop words are validated when the engine is built from the config, not here.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name conventionally used by embedders.
pub const CONFIG_FILE_NAME: &str = "quarry.toml";

/// Default shard count of the parallel relevance accumulator.
pub const DEFAULT_ACCUMULATOR_SHARDS: usize = 8;

/// Default capacity of the request statistics window (one day of minutes).
pub const DEFAULT_REQUEST_WINDOW: usize = 1440;

/// Engine configuration loaded from `quarry.toml`.
///
/// # Example
///
/// ```toml
/// stop_words = ["and", "in", "the"]
/// accumulator_shards = 8
/// request_window = 1440
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarryConfig {
    /// Terms dropped from both documents and queries.
    #[serde(default)]
    pub stop_words: Vec<String>,
    /// Number of independently locked shards used by parallel scoring.
    #[serde(default = "default_accumulator_shards")]
    pub accumulator_shards: usize,
    /// Number of recent requests kept by the request statistics tracker.
    #[serde(default = "default_request_window")]
    pub request_window: usize,
}

fn default_accumulator_shards() -> usize {
    DEFAULT_ACCUMULATOR_SHARDS
}

fn default_request_window() -> usize {
    DEFAULT_REQUEST_WINDOW
}

impl Default for QuarryConfig {
    fn default() -> Self {
        Self {
            stop_words: Vec::new(),
            accumulator_shards: DEFAULT_ACCUMULATOR_SHARDS,
            request_window: DEFAULT_REQUEST_WINDOW,
        }
    }
}

impl QuarryConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Quarry search engine configuration
#
# Stop words are removed from documents and queries alike.
# A stop word containing a control character is rejected.
stop_words = []

# Shard count of the accumulator used by parallel queries (default: 8).
accumulator_shards = 8

# How many recent requests the request statistics tracker remembers (default: 1440).
request_window = 1440
"#
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not valid TOML, has wrongly typed
    /// fields, or fails [`QuarryConfig::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: QuarryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `Config` if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => {
                Error::config(format!("invalid config file '{}': {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Check numeric settings.
    pub fn validate(&self) -> Result<()> {
        if self.accumulator_shards == 0 {
            return Err(Error::config("accumulator_shards must be at least 1"));
        }
        if self.request_window == 0 {
            return Err(Error::config("request_window must be at least 1"));
        }
        Ok(())
    }

    /// Builder: set stop words
    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = stop_words.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set accumulator shard count
    pub fn with_accumulator_shards(mut self, shards: usize) -> Self {
        self.accumulator_shards = shards;
        self
    }

    /// Builder: set request window capacity
    pub fn with_request_window(mut self, window: usize) -> Self {
        self.request_window = window;
        self
    }
}
