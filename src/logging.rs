//! Logging setup
//!
//! Events go to `investpro.log` in the base directory; stdout belongs to
//! the TUI and to table/JSON output.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{InvestPaths, Settings};
use crate::error::{InvestError, InvestResult};

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "INVESTPRO_LOG";

/// Filter from `INVESTPRO_LOG`, else from the settings
pub fn build_filter(settings: &Settings) -> InvestResult<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .map_err(|e| InvestError::Config(format!("Invalid log level '{}': {}", settings.log_level, e)))
}

/// Install the global subscriber, appending to the log file
pub fn init(paths: &InvestPaths, settings: &Settings) -> InvestResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| InvestError::Config(format!("Logging already initialized: {}", e)))?;

    tracing::debug!(log = %paths.log_file().display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_settings() {
        let settings = Settings {
            log_level: "debug".into(),
            ..Default::default()
        };
        if std::env::var(LOG_ENV).is_err() {
            assert!(build_filter(&settings).is_ok());
        }
    }

    #[test]
    fn test_invalid_level_rejected() {
        let settings = Settings {
            log_level: "investpro=loudest".into(),
            ..Default::default()
        };
        if std::env::var(LOG_ENV).is_err() {
            assert!(build_filter(&settings).is_err());
        }
    }
}
