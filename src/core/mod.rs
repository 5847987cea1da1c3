//! Core logger types and traits

pub mod ansi;
pub mod error;
pub mod formatter;
pub mod header;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod sink;

pub use error::{LoggerError, Result};
pub use formatter::{FormatterConfig, LoggerConfig};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use message::Concat;
pub use metrics::LoggerMetrics;
pub use sink::Sink;
