//! # Rust Color Logger
//!
//! A small leveled, colorized logger with synchronous, line-atomic writes.
//!
//! ## Features
//!
//! - **Levels**: ERROR, WARN, INFO, DEBUG, TRACE with a threshold gate that
//!   skips all formatting for disabled levels
//! - **Header**: optional `[LEVEL]` tag, `DD.MM.YYYY` date and `HH:MM:SS[.NNNNNN]`
//!   time in UTC or local time
//! - **Colors**: ANSI escape sequences per level, switchable at runtime
//! - **Thread Safe**: one lock per logger serializes writes, so lines never interleave
//! - **Fatal errors**: `Logger::error` records the line and exits the process
//!
//! ```
//! use rust_color_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .threshold(LogLevel::Info)
//!     .sink(sink.clone())
//!     .formatter(FormatterConfig::plain().with_show_level_tag(false).with_show_header(false))
//!     .build();
//!
//! logger.info(Concat(&[&"user ", &42, &" logged in"]));
//! assert_eq!(sink.contents(), "user 42 logged in\n");
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{ConsoleSink, ConsoleStream, MemorySink, WriterSink};
    pub use crate::core::{
        Concat, FormatterConfig, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result, Sink, FATAL_EXIT_CODE,
    };
}

#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{ConsoleSink, ConsoleStream, MemorySink, WriterSink};
pub use core::{
    Concat, FormatterConfig, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, Sink, FATAL_EXIT_CODE,
};
