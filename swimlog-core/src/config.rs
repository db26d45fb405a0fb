//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/swimlog/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/swimlog/` (~/.config/swimlog/)
//! - State/Logs: `$XDG_STATE_HOME/swimlog/` (~/.local/state/swimlog/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Habit grid configuration
    #[serde(default)]
    pub habit: HabitConfig,

    /// Trailing-week summary configuration
    #[serde(default)]
    pub week: WeekConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Habit grid configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HabitConfig {
    /// Number of weeks shown in the habit grid
    #[serde(default = "default_week_count")]
    pub week_count: usize,

    /// Distance thresholds (meters) separating the five intensity tiers.
    /// A day at or above `intensity_thresholds[i]` is at least tier `i + 1`.
    #[serde(default = "default_intensity_thresholds")]
    pub intensity_thresholds: [f64; 4],
}

impl Default for HabitConfig {
    fn default() -> Self {
        Self {
            week_count: default_week_count(),
            intensity_thresholds: default_intensity_thresholds(),
        }
    }
}

fn default_week_count() -> usize {
    12
}

fn default_intensity_thresholds() -> [f64; 4] {
    [500.0, 1000.0, 1500.0, 2000.0]
}

impl HabitConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.week_count == 0 {
            return Err(Error::Config(
                "habit.week_count must be at least 1".to_string(),
            ));
        }
        let ascending = self
            .intensity_thresholds
            .windows(2)
            .all(|pair| pair[0] < pair[1]);
        if !ascending || self.intensity_thresholds[0] <= 0.0 {
            return Err(Error::Config(
                "habit.intensity_thresholds must be positive and strictly ascending".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trailing-week summary configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WeekConfig {
    /// Use local-calendar-day comparison for the 7-day cutoff instead of
    /// the legacy full-timestamp `now - 7*24h` comparison.
    #[serde(default)]
    pub calendar_day_cutoff: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.habit.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/swimlog/config.toml` (~/.config/swimlog/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("swimlog").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/swimlog/` (~/.local/state/swimlog/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("swimlog")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/swimlog/swimlog.log` (~/.local/state/swimlog/swimlog.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("swimlog.log")
    }
}
