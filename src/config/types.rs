//! Configuration type definitions.

use crate::constants::DEFAULT_LOG_FILTER;
use serde::Deserialize;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,

    /// Test impersonation settings.
    pub testing: TestingConfig,
}

impl Config {
    /// Tool to impersonate in test mode.
    ///
    /// A non-empty `env_value` (from `SRATOOLS_IMPERSONATE`) wins over the file.
    pub fn impersonation(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|v| !v.is_empty())
            .or_else(|| self.testing.impersonate.clone())
            .filter(|v| !v.is_empty())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Test impersonation settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TestingConfig {
    /// Tool name to substitute for `argv[0]`.
    pub impersonate: Option<String>,
}
