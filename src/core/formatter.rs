//! Formatting and logger configuration
//!
//! [`FormatterConfig`] holds the switches that shape each emitted line.
//! [`LoggerConfig`] adds the threshold and can be loaded from JSON.

use super::error::Result;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Configuration for line formatting
///
/// # Examples
///
/// ```
/// use rust_color_logger::FormatterConfig;
///
/// let config = FormatterConfig::new()
///     .with_color(false)
///     .with_show_microseconds(true);
/// assert!(config.show_time);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Apply ANSI escape sequences to the output
    pub color: bool,
    /// Render timestamps in UTC instead of local time
    pub use_utc: bool,
    /// Master switch for the whole header
    pub show_header: bool,
    /// Include the `[LEVEL]` tag
    pub show_level_tag: bool,
    /// Include the date as `DD.MM.YYYY`
    pub show_date: bool,
    /// Include the time as `HH:MM:SS`
    pub show_time: bool,
    /// Append `.NNNNNN` to the time; ignored unless `show_time` is set
    pub show_microseconds: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            color: true,
            use_utc: true,
            show_header: true,
            show_level_tag: true,
            show_date: true,
            show_time: true,
            show_microseconds: false,
        }
    }
}

impl FormatterConfig {
    /// Create a new formatter configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain configuration: header on, no escape sequences
    #[must_use]
    pub fn plain() -> Self {
        Self::default().with_color(false)
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_use_utc(mut self, use_utc: bool) -> Self {
        self.use_utc = use_utc;
        self
    }

    #[must_use]
    pub fn with_show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    #[must_use]
    pub fn with_show_level_tag(mut self, show: bool) -> Self {
        self.show_level_tag = show;
        self
    }

    #[must_use]
    pub fn with_show_date(mut self, show: bool) -> Self {
        self.show_date = show;
        self
    }

    #[must_use]
    pub fn with_show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    #[must_use]
    pub fn with_show_microseconds(mut self, show: bool) -> Self {
        self.show_microseconds = show;
        self
    }

    /// Whether a timestamp is part of the header
    pub fn shows_timestamp(&self) -> bool {
        self.show_date || self.show_time
    }
}

/// Full logger configuration: threshold plus formatting switches
///
/// Every field is optional when deserializing.
///
/// ```
/// use rust_color_logger::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::from_json(r#"{"threshold": "Debug", "color": false}"#).unwrap();
/// assert_eq!(config.threshold, LogLevel::Debug);
/// assert!(!config.format.color);
/// assert!(config.format.show_date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub threshold: LogLevel,
    #[serde(flatten)]
    pub format: FormatterConfig,
}

impl LoggerConfig {
    pub fn new(threshold: LogLevel, format: FormatterConfig) -> Self {
        Self { threshold, format }
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
