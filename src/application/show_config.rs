//! Config inspection use case

use crate::error::{RemitError, Result};
use crate::infrastructure::Config;

/// Keys understood by `remit config`
pub const CONFIG_KEYS: [&str; 3] = ["short_sentence_policy", "date_format", "strict_ranges"];

/// Service for reading the effective configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(config: Config) -> Self {
        ConfigService { config }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "short_sentence_policy" | "policy" => {
                Ok(self.config.short_sentence_policy.to_string())
            }
            "date_format" => Ok(self.config.date_format.clone()),
            "strict_ranges" => Ok(self.config.strict_ranges.to_string()),
            _ => Err(RemitError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key,
                CONFIG_KEYS.join(", ")
            ))),
        }
    }

    /// All config values as TOML
    pub fn list(&self) -> Result<String> {
        self.config.to_toml()
    }
}
