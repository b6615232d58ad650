//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::identity::Imposter;
use tracing_subscriber::EnvFilter;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    EnvFilter::try_new(&config.logging.filter).map_err(|e| Error::ConfigValidation {
        message: format!("invalid logging filter '{}': {e}", config.logging.filter),
    })?;

    if let Some(name) = &config.testing.impersonate
        && !name.is_empty()
        && Imposter::from_basename(name.split('.').next().unwrap_or_default()) == Imposter::Invalid
    {
        return Err(Error::ConfigValidation {
            message: format!("testing.impersonate '{name}' is not a recognized tool name"),
        });
    }

    Ok(())
}
