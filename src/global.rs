//! Process-wide default logger
//!
//! The default instance writes to stderr at TRACE with the default
//! formatting. It is built on first use and lives for the rest of the
//! process. The free functions forward to it and ignore sink errors.
//!
//! ```
//! use rust_color_logger::{global, LogLevel};
//!
//! global::set_threshold(LogLevel::Warn);
//! global::info("not shown");
//! global::warn(format_args!("{} retries left", 2));
//! ```

use crate::core::{LogLevel, Logger, Sink};
use crate::sinks::ConsoleSink;
use std::fmt;
use std::sync::OnceLock;

/// Threshold of the default instance.
pub const DEFAULT_THRESHOLD: LogLevel = LogLevel::Trace;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The default logger, created on first call.
pub fn logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::new(ConsoleSink::stderr(), DEFAULT_THRESHOLD))
}

pub fn is_enabled(level: LogLevel) -> bool {
    logger().is_enabled(level)
}

pub fn is_error() -> bool {
    logger().is_error()
}

pub fn is_warn() -> bool {
    logger().is_warn()
}

pub fn is_info() -> bool {
    logger().is_info()
}

pub fn is_debug() -> bool {
    logger().is_debug()
}

pub fn is_trace() -> bool {
    logger().is_trace()
}

pub fn threshold() -> LogLevel {
    logger().threshold()
}

pub fn set_threshold(level: LogLevel) {
    logger().set_threshold(level);
}

/// See [`Logger::set_verbosity`].
pub fn set_verbosity(verbosity: i64) -> LogLevel {
    logger().set_verbosity(verbosity)
}

/// Redirect the default logger, returning the previous sink.
pub fn set_sink(sink: Box<dyn Sink>) -> Box<dyn Sink> {
    logger().set_sink(sink)
}

/// Write at ERROR level on the default logger and terminate the process.
pub fn error(message: impl fmt::Display) -> ! {
    logger().error(message)
}

pub fn warn(message: impl fmt::Display) {
    logger().warn(message);
}

pub fn info(message: impl fmt::Display) {
    logger().info(message);
}

pub fn debug(message: impl fmt::Display) {
    logger().debug(message);
}

pub fn trace(message: impl fmt::Display) {
    logger().trace(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instance_is_shared() {
        assert!(std::ptr::eq(logger(), logger()));
        assert!(is_error());
        assert_eq!(logger().sink_name(), "stderr");
    }
}
