//! Configuration management

use crate::domain::{CalendarDate, ShortSentencePolicy};
use crate::error::{RemitError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "remit.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "REMIT_CONFIG";

/// Environment override for `short_sentence_policy`
pub const POLICY_ENV: &str = "REMIT_POLICY";

/// Environment override for `date_format`
pub const DATE_FORMAT_ENV: &str = "REMIT_DATE_FORMAT";

const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Earliest discharge rule for sentences of a month or less
    pub short_sentence_policy: ShortSentencePolicy,
    /// chrono strftime pattern used when printing dates
    pub date_format: String,
    /// Reject months above 11 and days above 29
    pub strict_ranges: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            short_sentence_policy: ShortSentencePolicy::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            strict_ranges: true,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RemitError::Config(format!("Config file not found: {}", path.display()))
            } else {
                RemitError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            RemitError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise `remit.toml` in `dir` is used
    /// when present, falling back to defaults. Environment overrides are
    /// applied last.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_path(path)?,
            None => {
                let local = dir.join(CONFIG_FILE_NAME);
                if local.exists() {
                    Self::load_from_path(&local)?
                } else {
                    Config::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `REMIT_POLICY` and `REMIT_DATE_FORMAT` style overrides
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(POLICY_ENV) {
            self.short_sentence_policy =
                ShortSentencePolicy::from_str(&policy).map_err(RemitError::Config)?;
        }
        if let Some(format) = lookup(DATE_FORMAT_ENV) {
            self.date_format = format;
        }
        self.validate()
    }

    /// Check that the date format renders a date.
    ///
    /// Unknown specifiers and time or zone fields (`%H`, `%z`) are rejected.
    pub fn validate(&self) -> Result<()> {
        let sample = CalendarDate::new(2024, 1, 31)?;
        sample.format(&self.date_format).map(|_| ())
    }

    /// Render the config as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
