//! # Engine Configuration
//!
//! Configuration for the scheduling engine, loaded from environment
//! variables with sensible defaults.
//!
//! ## Environment Variables
//!
//! - `POLL_INTERVAL_SECONDS`: seconds between evaluation ticks (default: 60)
//! - `TOLERANCE_MINUTES`: window either side of a scheduled time within
//!   which a reminder counts as due (default: 5)
//! - `SNOOZE_MINUTES`: how long a snoozed alert stays hidden (default: 10)
//! - `HISTORY_RECENT_LIMIT`: entries shown in the recent-history view
//!   (default: 10)
//! - `LOG_LEVEL`: logging level (default: "info")

use std::env;

use chrono::Duration;
use eyre::{Result, WrapErr};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Seconds between poll ticks
    pub poll_interval_seconds: u64,

    /// Minutes either side of a scheduled instant that count as due
    pub tolerance_minutes: i64,

    /// Minutes a snoozed alert stays hidden
    pub snooze_minutes: i64,

    /// Number of entries in the recent-history view
    pub history_recent_limit: usize,

    /// Log level for the engine
    pub log_level: Level,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: 60,
            tolerance_minutes: 5,
            snooze_minutes: 10,
            history_recent_limit: 10,
            log_level: Level::INFO,
        }
    }
}

impl EngineConfig {
    /// Creates an EngineConfig from environment variables, falling back
    /// to the documented defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable cannot be parsed as a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let poll_interval_seconds = match env::var("POLL_INTERVAL_SECONDS") {
            Ok(raw) => raw.parse().wrap_err("Invalid POLL_INTERVAL_SECONDS value")?,
            Err(_) => defaults.poll_interval_seconds,
        };

        let tolerance_minutes = match env::var("TOLERANCE_MINUTES") {
            Ok(raw) => raw.parse().wrap_err("Invalid TOLERANCE_MINUTES value")?,
            Err(_) => defaults.tolerance_minutes,
        };

        let snooze_minutes = match env::var("SNOOZE_MINUTES") {
            Ok(raw) => raw.parse().wrap_err("Invalid SNOOZE_MINUTES value")?,
            Err(_) => defaults.snooze_minutes,
        };

        let history_recent_limit = match env::var("HISTORY_RECENT_LIMIT") {
            Ok(raw) => raw.parse().wrap_err("Invalid HISTORY_RECENT_LIMIT value")?,
            Err(_) => defaults.history_recent_limit,
        };

        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            poll_interval_seconds,
            tolerance_minutes,
            snooze_minutes,
            history_recent_limit,
            log_level,
        })
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_seconds)
    }

    pub fn tolerance(&self) -> Duration {
        Duration::minutes(self.tolerance_minutes)
    }

    pub fn snooze_duration(&self) -> Duration {
        Duration::minutes(self.snooze_minutes)
    }
}
