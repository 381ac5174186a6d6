//! Severity levels.
//!
//! Levels are totally ordered from `Trace` to `Fatal`, with `Disabled` as a
//! threshold-only sentinel above everything else. Each level has a small
//! integer code used for numeric dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Log severity level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    /// Threshold that suppresses every record.
    Disabled,
}

/// Error returned when a level name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl Level {
    /// Every emitting level, most verbose first.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Stable numeric code.
    pub fn code(self) -> u8 {
        match self {
            Level::Trace => 0,
            Level::Debug => 1,
            Level::Info => 2,
            Level::Warn => 3,
            Level::Error => 4,
            Level::Fatal => 5,
            Level::Disabled => 6,
        }
    }

    pub fn from_code(code: i64) -> Option<Level> {
        match code {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            5 => Some(Level::Fatal),
            6 => Some(Level::Disabled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Disabled => "disabled",
        }
    }

    /// Corresponding `log` crate level. `log` has no fatal tier, so Fatal
    /// maps to Error; Disabled has no counterpart.
    pub fn to_log(self) -> Option<log::Level> {
        match self {
            Level::Trace => Some(log::Level::Trace),
            Level::Debug => Some(log::Level::Debug),
            Level::Info => Some(log::Level::Info),
            Level::Warn => Some(log::Level::Warn),
            Level::Error | Level::Fatal => Some(log::Level::Error),
            Level::Disabled => None,
        }
    }

    /// `log` filter that lets through this level and everything above it.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self.to_log() {
            Some(level) => level.to_level_filter(),
            None => log::LevelFilter::Off,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "disabled" | "off" => Ok(Level::Disabled),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Disabled);
    }

    #[test]
    fn test_code_mapping_is_stable() {
        let codes: Vec<u8> = Level::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(Level::Disabled.code(), 6);

        for level in Level::ALL {
            assert_eq!(Level::from_code(level.code() as i64), Some(level));
        }
    }

    #[test]
    fn test_unknown_code_has_no_level() {
        assert_eq!(Level::from_code(-1), None);
        assert_eq!(Level::from_code(7), None);
        assert_eq!(Level::from_code(42), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("INFO".parse::<Level>(), Ok(Level::Info));
        assert_eq!(" warning ".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("off".parse::<Level>(), Ok(Level::Disabled));
        assert!("verbose".parse::<Level>().is_err());

        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn test_log_crate_mapping() {
        assert_eq!(Level::Fatal.to_log(), Some(log::Level::Error));
        assert_eq!(Level::Disabled.to_log(), None);
        assert_eq!(Level::Disabled.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(Level::Warn.to_level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Level::Warn).unwrap();
        assert_eq!(json, r#""warn""#);
        let level: Level = serde_json::from_str(r#""fatal""#).unwrap();
        assert_eq!(level, Level::Fatal);
    }

    proptest! {
        #[test]
        fn prop_order_matches_codes(a in 0i64..7, b in 0i64..7) {
            let la = Level::from_code(a).unwrap();
            let lb = Level::from_code(b).unwrap();
            prop_assert_eq!(la.cmp(&lb), a.cmp(&b));
        }
    }
}
