//! Logging configuration from YAML files and the environment
//!
//! ```yaml
//! logging:
//!   file: /var/log/chain.log
//!   quiet: true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::file::FileOption;
use super::resolve::LoggingOptions;
use crate::error::{LogError, LogResult};

/// Overrides `file` when set
pub const ENV_FILE: &str = "CHAINLOG_FILE";

/// Overrides `quiet`; must be `1`/`true` or `0`/`false`
pub const ENV_QUIET: &str = "CHAINLOG_QUIET";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Serializable subset of the logging options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Path or `file://` URL of the log file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Suppress the default console output
    #[serde(default)]
    pub quiet: bool,
}

impl LoggingConfig {
    /// Parse the `logging` section of a YAML document
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        Ok(file.logging)
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Apply `CHAINLOG_FILE` / `CHAINLOG_QUIET` from the process environment
    pub fn with_env_overrides(self) -> LogResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any variable lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> LogResult<Self> {
        if let Some(file) = lookup(ENV_FILE).filter(|v| !v.is_empty()) {
            self.file = Some(file);
        }

        if let Some(quiet) = lookup(ENV_QUIET) {
            match quiet.to_lowercase().as_str() {
                "1" | "true" => self.quiet = true,
                "0" | "false" => self.quiet = false,
                _ => {
                    return Err(LogError::config(format!(
                        "{} must be 1, true, 0 or false, got {:?}",
                        ENV_QUIET, quiet
                    )))
                }
            }
        }

        Ok(self)
    }

    /// Options for building a logger from this config
    pub fn into_options(self) -> LoggingOptions {
        let mut options = LoggingOptions::new().quiet(self.quiet);
        if let Some(file) = self.file {
            options = options.file(FileOption::parse(&file));
        }
        options
    }
}
