//! Logger configuration.
//!
//! Loggers are built from an explicit [`LoggerConfig`]. A process-wide
//! default exists for the convenience constructors and is created lazily
//! the first time it is read.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::level::{Level, ParseLevelError};
use super::sink::{LogCrateSink, Sink};

/// Environment variable holding the default threshold.
pub const LEVEL_ENV: &str = "STORE_LOG_LEVEL";
/// Environment variable holding the timestamp format.
pub const TIME_FORMAT_ENV: &str = "STORE_LOG_TIME_FORMAT";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    Level {
        var: &'static str,
        #[source]
        source: ParseLevelError,
    },
    #[error("invalid {var}: unknown time format {value:?}")]
    TimeFormat { var: &'static str, value: String },
}

/// Timestamp rendering used by sinks that stamp records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// Integer seconds since the epoch.
    #[default]
    Unix,
    UnixMillis,
    Rfc3339,
}

impl TimeFormat {
    /// Current time rendered in this format.
    pub fn now(self) -> Value {
        let now = Utc::now();
        match self {
            TimeFormat::Unix => Value::from(now.timestamp()),
            TimeFormat::UnixMillis => Value::from(now.timestamp_millis()),
            TimeFormat::Rfc3339 => Value::from(now.to_rfc3339()),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix" => Ok(TimeFormat::Unix),
            "unix_millis" | "unixms" => Ok(TimeFormat::UnixMillis),
            "rfc3339" => Ok(TimeFormat::Rfc3339),
            other => Err(other.to_string()),
        }
    }
}

/// Settings a [`Logger`](super::Logger) is constructed from.
#[derive(Clone)]
pub struct LoggerConfig {
    /// Initial minimum level.
    pub level: Level,
    pub time_format: TimeFormat,
    pub sink: Arc<dyn Sink>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Trace,
            time_format: TimeFormat::Unix,
            sink: Arc::new(LogCrateSink),
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("time_format", &self.time_format)
            .finish_non_exhaustive()
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = sink;
        self
    }

    /// Defaults overridden by `STORE_LOG_LEVEL` and `STORE_LOG_TIME_FORMAT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LEVEL_ENV) {
            config.level = raw.parse::<Level>().map_err(|source| ConfigError::Level {
                var: LEVEL_ENV,
                source,
            })?;
        }

        if let Some(raw) = lookup(TIME_FORMAT_ENV) {
            config.time_format =
                raw.parse::<TimeFormat>()
                    .map_err(|value| ConfigError::TimeFormat {
                        var: TIME_FORMAT_ENV,
                        value,
                    })?;
        }

        Ok(config)
    }
}

lazy_static! {
    static ref DEFAULT_CONFIG: RwLock<LoggerConfig> = RwLock::new(LoggerConfig::default());
}

/// Clone of the process default configuration.
pub fn default_config() -> LoggerConfig {
    DEFAULT_CONFIG.read().clone()
}

/// Replace the process default. Loggers built earlier keep their settings.
pub fn set_default_config(config: LoggerConfig) {
    *DEFAULT_CONFIG.write() = config;
}

/// Install `env_logger` as the `log` backend used by [`LogCrateSink`].
///
/// Later calls are no-ops once a backend is installed.
pub fn init_backend(level: Level) {
    let _ = env_logger::builder()
        .filter_level(level.to_level_filter())
        .format_timestamp_millis()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, Level::Trace);
        assert_eq!(config.time_format, TimeFormat::Unix);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = LoggerConfig::from_lookup(lookup(&[
            (LEVEL_ENV, "warn"),
            (TIME_FORMAT_ENV, "rfc3339"),
        ]))
        .unwrap();
        assert_eq!(config.level, Level::Warn);
        assert_eq!(config.time_format, TimeFormat::Rfc3339);
    }

    #[test]
    fn test_from_lookup_empty_keeps_defaults() {
        let config = LoggerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.level, Level::Trace);
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let err = LoggerConfig::from_lookup(lookup(&[(LEVEL_ENV, "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::Level { var: LEVEL_ENV, .. }));
        assert!(err.to_string().contains("loud"));

        let err = LoggerConfig::from_lookup(lookup(&[(TIME_FORMAT_ENV, "iso")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TimeFormat {
                var: TIME_FORMAT_ENV,
                value: "iso".to_string()
            }
        );
    }

    #[test]
    fn test_time_format_now() {
        assert!(TimeFormat::Unix.now().is_i64());
        assert!(TimeFormat::UnixMillis.now().as_i64().unwrap() > 1_000_000_000_000);
        assert!(TimeFormat::Rfc3339.now().is_string());
    }

    #[test]
    fn test_time_format_names() {
        assert_eq!("unix".parse::<TimeFormat>(), Ok(TimeFormat::Unix));
        assert_eq!("unix_millis".parse::<TimeFormat>(), Ok(TimeFormat::UnixMillis));
        assert_eq!(" UnixMS ".parse::<TimeFormat>(), Ok(TimeFormat::UnixMillis));
        assert_eq!("RFC3339".parse::<TimeFormat>(), Ok(TimeFormat::Rfc3339));

        for format in [TimeFormat::Unix, TimeFormat::UnixMillis, TimeFormat::Rfc3339] {
            let name = serde_json::to_string(&format).unwrap();
            let back: TimeFormat = serde_json::from_str(&name).unwrap();
            assert_eq!(back, format);
            assert_eq!(name.trim_matches('"').parse::<TimeFormat>(), Ok(format));
        }
        assert_eq!(
            serde_json::to_string(&TimeFormat::UnixMillis).unwrap(),
            r#""unix_millis""#
        );
    }

    #[test]
    fn test_builder() {
        let config = LoggerConfig::new()
            .with_level(Level::Error)
            .with_time_format(TimeFormat::UnixMillis);
        assert_eq!(config.level, Level::Error);
        assert_eq!(config.time_format, TimeFormat::UnixMillis);
        assert!(format!("{:?}", config).starts_with("LoggerConfig"));
    }

    #[test]
    fn test_init_backend_is_idempotent() {
        init_backend(Level::Info);
        init_backend(Level::Debug);
    }
}
