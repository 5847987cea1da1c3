//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes the logger first and then either a format string with
//! arguments (like `println!`) or, after a `;`, a list of displayable values
//! that are concatenated with no separator. Arguments are only formatted
//! when the level is enabled.
//!
//! # Examples
//!
//! ```
//! use rust_color_logger::prelude::*;
//! use rust_color_logger::{info, warn};
//!
//! let logger = Logger::new(MemorySink::new(), LogLevel::Info);
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Concatenated values
//! warn!(logger; "retry ", 3, " of ", 5);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new(MemorySink::new(), LogLevel::Info);
/// use rust_color_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Warn, "Status code: {}", 503);
/// log!(logger, LogLevel::Info; "user ", 42, " logged in");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr; $($part:expr),+ $(,)?) => {
        $logger.log($level, $crate::Concat(&[$(&$part as &dyn ::std::fmt::Display),+]))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Trace; $($part),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug; $($part),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info; $($part),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr; $($part:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn; $($part),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message and terminate the process.
///
/// Expands to [`Logger::error`](crate::Logger::error), which never returns.
///
/// ```no_run
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new(MemorySink::new(), LogLevel::Info);
/// use rust_color_logger::error;
/// error!(logger, "Unable to bind port {}", 8080);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr; $($part:expr),+ $(,)?) => {
        $logger.error($crate::Concat(&[$(&$part as &dyn ::std::fmt::Display),+]))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{FormatterConfig, LogLevel, Logger};
    use crate::sinks::MemorySink;

    fn bare_logger(threshold: LogLevel) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .threshold(threshold)
            .sink(sink.clone())
            .formatter(FormatterConfig::plain().with_show_header(false))
            .build();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = bare_logger(LogLevel::Info);
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        log!(logger, LogLevel::Info; "Joined: ", 4, 2);
        assert_eq!(sink.lines(), vec!["Test message", "Formatted: 42", "Joined: 42"]);
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = bare_logger(LogLevel::Trace);
        trace!(logger, "Value: {}", 10);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        assert_eq!(
            sink.lines(),
            vec!["Value: 10", "Count: 5", "Items: 100", "Retry 1 of 3"]
        );
    }

    #[test]
    fn test_concat_macros() {
        let (logger, sink) = bare_logger(LogLevel::Trace);
        let name = String::from("db");
        trace!(logger; "a", 1);
        debug!(logger; name, ":", 5432,);
        info!(logger; 'x');
        warn!(logger; 1.5, "s");
        assert_eq!(sink.lines(), vec!["a1", "db:5432", "x", "1.5s"]);
    }

    #[test]
    fn test_disabled_macro_skips_formatting() {
        struct Spy<'a>(&'a std::cell::Cell<usize>);

        impl std::fmt::Display for Spy<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.set(self.0.get() + 1);
                f.write_str("spy")
            }
        }

        let (logger, sink) = bare_logger(LogLevel::Warn);
        let renders = std::cell::Cell::new(0);

        debug!(logger, "{}", Spy(&renders));
        trace!(logger; "a", Spy(&renders));
        assert_eq!(renders.get(), 0);
        assert_eq!(sink.write_calls(), 0);

        warn!(logger, "{}", Spy(&renders));
        warn!(logger; Spy(&renders), "!");
        assert_eq!(renders.get(), 2);
        assert_eq!(sink.lines(), vec!["spy", "spy!"]);
    }
}
