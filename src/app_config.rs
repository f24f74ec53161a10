use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the workload report
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReportConfig {
    // @field: Totals strictly above this many hours count as a long workload
    #[serde(default = "default_long_shift_hours")]
    pub long_shift_hours: i64,

    // @field: Translator handles already credited elsewhere; anyone missing
    // from the list is reported with a manual time credit instead
    #[serde(default)]
    pub roster: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            long_shift_hours: default_long_shift_hours(),
            roster: Vec::new(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_long_shift_hours() -> i64 {
    6
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.report.long_shift_hours < 0 {
            return Err(anyhow!(
                "long_shift_hours must not be negative, got {}",
                self.report.long_shift_hours
            ));
        }

        if self.report.roster.iter().any(|name| name.trim().is_empty()) {
            return Err(anyhow!("roster entries must not be blank"));
        }

        Ok(())
    }
}
