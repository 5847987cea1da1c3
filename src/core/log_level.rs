//! Log level definitions

use super::error::LoggerError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Ordered by importance: `Trace < Debug < Info < Warn < Error`. A message is
/// emitted when its level is at least as severe as the logger threshold.
///
/// Serialized as its upper-case name. Deserializes from a level name (any
/// case, see [`FromStr`]) or from a numeric verbosity, which is clamped like
/// [`LogLevel::from_verbosity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// All levels, most severe first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Lowest verbosity value, maps to [`LogLevel::Error`].
    pub const MIN_VERBOSITY: i64 = 0;
    /// Highest verbosity value, maps to [`LogLevel::Trace`].
    pub const MAX_VERBOSITY: i64 = 4;

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Header tag, always 8 bytes wide including the brackets.
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Trace => "[TRACE] ",
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Info => "[INFO]  ",
            LogLevel::Warn => "[WARN]  ",
            LogLevel::Error => "[ERROR] ",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => White,
            LogLevel::Debug => Cyan,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
        }
    }

    /// Map a numeric verbosity (0 = ERROR .. 4 = TRACE) to a level.
    ///
    /// Values outside the range are clamped to the nearest bound.
    pub fn from_verbosity(verbosity: i64) -> Self {
        match verbosity.clamp(Self::MIN_VERBOSITY, Self::MAX_VERBOSITY) {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Inverse of [`LogLevel::from_verbosity`].
    pub fn verbosity(&self) -> i64 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

struct LogLevelVisitor;

impl<'de> Visitor<'de> for LogLevelVisitor {
    type Value = LogLevel;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a level name or a verbosity from 0 (ERROR) to 4 (TRACE)")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(LogLevel::from_verbosity(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(LogLevel::from_verbosity(i64::try_from(value).unwrap_or(i64::MAX)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LogLevelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Debug > LogLevel::Trace);
    }

    #[test]
    fn test_tags_are_eight_bytes() {
        for level in LogLevel::ALL {
            assert_eq!(level.tag().len(), 8, "tag for {} has wrong width", level);
            assert!(level.tag().starts_with(&format!("[{}]", level.to_str())));
        }
    }

    #[test]
    fn test_verbosity_clamps() {
        assert_eq!(LogLevel::from_verbosity(-3), LogLevel::Error);
        assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
        assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
        assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
        assert_eq!(LogLevel::from_verbosity(99), LogLevel::Trace);
        assert_eq!(LogLevel::from_verbosity(i64::MIN), LogLevel::Error);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" Debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(ref s) if s == "loud"));
    }

    #[test]
    fn test_deserialize_names_any_case() {
        for (json, level) in [
            (r#""INFO""#, LogLevel::Info),
            (r#""Debug""#, LogLevel::Debug),
            (r#""warning""#, LogLevel::Warn),
            (r#""error""#, LogLevel::Error),
        ] {
            assert_eq!(serde_json::from_str::<LogLevel>(json).unwrap(), level);
        }
        assert!(serde_json::from_str::<LogLevel>(r#""loud""#).is_err());
    }

    #[test]
    fn test_deserialize_verbosity_clamps() {
        assert_eq!(serde_json::from_str::<LogLevel>("2").unwrap(), LogLevel::Info);
        assert_eq!(serde_json::from_str::<LogLevel>("0").unwrap(), LogLevel::Error);
        assert_eq!(serde_json::from_str::<LogLevel>("7").unwrap(), LogLevel::Trace);
        assert_eq!(serde_json::from_str::<LogLevel>("-3").unwrap(), LogLevel::Error);
        assert_eq!(
            serde_json::from_str::<LogLevel>("18446744073709551615").unwrap(),
            LogLevel::Trace
        );
        assert!(serde_json::from_str::<LogLevel>("true").is_err());
    }

    #[test]
    fn test_serialize_as_name() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), r#""WARN""#);
        for level in LogLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(serde_json::from_str::<LogLevel>(&json).unwrap(), level);
        }
    }

    #[test]
    fn test_u8_roundtrip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
    }
}
