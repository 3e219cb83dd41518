//! Configuration management for the task list application.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::reducer::DEFAULT_NOTICE_DURATION;
use crate::strings::{Locale, UnknownLocale};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Default tracing filter when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "tasks=info,tasklist_runtime=warn";

/// Extra time granted to shutdown beyond the longest notice timer
const SHUTDOWN_GRACE: Duration = Duration::from_millis(100);

/// Errors raised for invalid configuration values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `TASKS_LOCALE` is not a supported locale
    #[error("TASKS_LOCALE: {0}")]
    Locale(#[from] UnknownLocale),

    /// `TASKS_NOTICE_MS` is not a whole number of milliseconds
    #[error("TASKS_NOTICE_MS must be a whole number of milliseconds, got `{0}`")]
    NoticeDuration(String),

    /// A boolean flag has an unrecognized value
    #[error("{key} must be true or false, got `{value}`")]
    Flag {
        /// Variable name
        key: &'static str,
        /// Offending value
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Language of the string resources (`TASKS_LOCALE`, default `es`)
    pub locale: Locale,
    /// How long a notice stays visible (`TASKS_NOTICE_MS`, default 2000)
    pub notice_duration: Duration,
    /// Draw completed rows with ANSI strikethrough (`TASKS_COLOR`, default true)
    pub ansi: bool,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            notice_duration: DEFAULT_NOTICE_DURATION,
            ansi: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let locale = match lookup("TASKS_LOCALE") {
            Some(value) => value.parse()?,
            None => defaults.locale,
        };

        let notice_duration = match lookup("TASKS_NOTICE_MS") {
            Some(value) => value
                .trim()
                .parse()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::NoticeDuration(value))?,
            None => defaults.notice_duration,
        };

        let ansi = match lookup("TASKS_COLOR") {
            Some(value) => parse_flag("TASKS_COLOR", value)?,
            None => defaults.ansi,
        };

        Ok(Self {
            locale,
            notice_duration,
            ansi,
            log_filter: defaults.log_filter,
        })
    }

    /// How long shutdown may wait for pending notice timers
    ///
    /// Long enough for a notice raised just before quitting to expire.
    #[must_use]
    pub fn shutdown_timeout(&self) -> Duration {
        self.notice_duration.saturating_add(SHUTDOWN_GRACE)
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Flag { key, value }),
    }
}
