//! User settings for InvestPro
//!
//! Manages display preferences and the refresh cadence of the simulated
//! market grid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::InvestPaths;
use crate::error::InvestError;
use crate::models::Timeframe;

/// User settings for InvestPro
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How often the market grid is regenerated, in milliseconds
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// TUI event-loop tick rate, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Timeframe selected when the market section opens
    #[serde(default)]
    pub default_timeframe: Timeframe,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether the portfolio balance starts visible
    #[serde(default = "default_true")]
    pub show_balance: bool,

    /// Default log filter (overridden by `INVESTPRO_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_refresh_interval_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            refresh_interval_ms: default_refresh_interval_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            default_timeframe: Timeframe::default(),
            currency_symbol: default_currency(),
            show_balance: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Market refresh interval as a Duration
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Event-loop tick rate as a Duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Reject settings the event loop cannot run with
    pub fn validate(&self) -> Result<(), InvestError> {
        if self.refresh_interval_ms == 0 {
            return Err(InvestError::Config(
                "refresh_interval_ms must be greater than zero".into(),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(InvestError::Config(
                "tick_rate_ms must be greater than zero".into(),
            ));
        }
        if self.tick_rate_ms > self.refresh_interval_ms {
            return Err(InvestError::Config(format!(
                "tick_rate_ms ({}) must not exceed refresh_interval_ms ({})",
                self.tick_rate_ms, self.refresh_interval_ms
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &InvestPaths) -> Result<Self, InvestError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                InvestError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                InvestError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &InvestPaths) -> Result<(), InvestError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            InvestError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            InvestError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.refresh_interval(), Duration::from_secs(3));
        assert_eq!(settings.tick_rate(), Duration::from_millis(250));
        assert_eq!(settings.default_timeframe, Timeframe::OneDay);
        assert!(settings.show_balance);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InvestPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            refresh_interval_ms: 5000,
            default_timeframe: Timeframe::OneMonth,
            show_balance: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.refresh_interval_ms, 5000);
        assert_eq!(loaded.default_timeframe, Timeframe::OneMonth);
        assert!(!loaded.show_balance);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InvestPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.refresh_interval_ms, 3000);
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InvestPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"refresh_interval_ms": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, InvestError::Config(_)));
    }

    #[test]
    fn test_tick_slower_than_refresh_rejected() {
        let settings = Settings {
            refresh_interval_ms: 100,
            tick_rate_ms: 500,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
