//! Main logger implementation

use super::{
    ansi,
    error::{LoggerError, Result},
    formatter::{FormatterConfig, LoggerConfig},
    header,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::sinks::ConsoleSink;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::fmt::{self, Write as _};
use std::sync::atomic::{AtomicU8, Ordering};

/// Exit status used by [`Logger::error`]
pub const FATAL_EXIT_CODE: i32 = 1;

/// Sink plus the scratch buffer reused by every write.
struct SinkState {
    sink: Box<dyn Sink>,
    buf: Vec<u8>,
}

/// `fmt::Write` over the scratch buffer, so a failing `Display` surfaces as
/// an error instead of a panic.
struct ByteWriter<'a>(&'a mut Vec<u8>);

impl fmt::Write for ByteWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Leveled, colorized, synchronous logger.
///
/// Every emitted line is assembled in a scratch buffer and handed to the sink
/// in one call while holding the logger lock, so lines from concurrent
/// callers never interleave.
///
/// # Example
/// ```
/// use rust_color_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .threshold(LogLevel::Debug)
///     .sink(sink.clone())
///     .formatter(FormatterConfig::plain().with_show_date(false).with_show_time(false))
///     .build();
///
/// logger.info("ready");
/// logger.trace("dropped before formatting");
/// assert_eq!(sink.contents(), "[INFO] : ready\n");
/// ```
pub struct Logger {
    threshold: AtomicU8,
    format: RwLock<FormatterConfig>,
    state: Mutex<SinkState>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger writing to `sink` with the default formatting.
    #[must_use]
    pub fn new<S: Sink + 'static>(sink: S, threshold: LogLevel) -> Self {
        Self::with_parts(Box::new(sink), threshold, FormatterConfig::default())
    }

    /// Create a logger from a loaded configuration.
    #[must_use]
    pub fn from_config<S: Sink + 'static>(config: LoggerConfig, sink: S) -> Self {
        Self::with_parts(Box::new(sink), config.threshold, config.format)
    }

    fn with_parts(sink: Box<dyn Sink>, threshold: LogLevel, format: FormatterConfig) -> Self {
        Self {
            threshold: AtomicU8::new(threshold as u8),
            format: RwLock::new(format),
            state: Mutex::new(SinkState {
                sink,
                buf: Vec::with_capacity(256),
            }),
            metrics: LoggerMetrics::new(),
        }
    }

    // ------------------------------------------------------------------
    // Gate
    // ------------------------------------------------------------------

    /// True if messages at `level` pass the threshold.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.threshold()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    #[inline]
    pub fn is_warn(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    #[inline]
    pub fn is_info(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    #[inline]
    pub fn is_debug(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    #[inline]
    pub fn is_trace(&self) -> bool {
        self.is_enabled(LogLevel::Trace)
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    #[inline]
    pub fn threshold(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Acquire))
    }

    pub fn set_threshold(&self, level: LogLevel) {
        let _state = self.state.lock();
        self.threshold.store(level as u8, Ordering::Release);
    }

    /// Set the threshold from a numeric verbosity (0 = ERROR .. 4 = TRACE).
    ///
    /// Out-of-range values are clamped; the resulting level is returned.
    pub fn set_verbosity(&self, verbosity: i64) -> LogLevel {
        let level = LogLevel::from_verbosity(verbosity);
        self.set_threshold(level);
        level
    }

    /// Snapshot of the formatting switches.
    pub fn formatter(&self) -> FormatterConfig {
        *self.format.read()
    }

    pub fn set_formatter(&self, config: FormatterConfig) {
        *self.format.write() = config;
    }

    /// Modify the formatting switches in place.
    ///
    /// ```
    /// # use rust_color_logger::prelude::*;
    /// let logger = Logger::new(MemorySink::new(), LogLevel::Info);
    /// logger.update_formatter(|f| {
    ///     f.color = false;
    ///     f.show_microseconds = true;
    /// });
    /// assert!(!logger.formatter().color);
    /// ```
    ///
    /// # Deadlocks
    ///
    /// `f` runs under the formatter lock; logging through this logger from
    /// inside it never returns.
    pub fn update_formatter(&self, f: impl FnOnce(&mut FormatterConfig)) {
        f(&mut self.format.write());
    }

    pub fn set_color(&self, color: bool) {
        self.format.write().color = color;
    }

    pub fn set_use_utc(&self, use_utc: bool) {
        self.format.write().use_utc = use_utc;
    }

    pub fn set_show_header(&self, show: bool) {
        self.format.write().show_header = show;
    }

    pub fn set_show_level_tag(&self, show: bool) {
        self.format.write().show_level_tag = show;
    }

    pub fn set_show_date(&self, show: bool) {
        self.format.write().show_date = show;
    }

    pub fn set_show_time(&self, show: bool) {
        self.format.write().show_time = show;
    }

    pub fn set_show_microseconds(&self, show: bool) {
        self.format.write().show_microseconds = show;
    }

    /// Replace the sink, returning the previous one.
    pub fn set_sink(&self, sink: Box<dyn Sink>) -> Box<dyn Sink> {
        let mut state = self.state.lock();
        std::mem::replace(&mut state.sink, sink)
    }

    /// Run `f` with exclusive access to the current sink.
    ///
    /// # Deadlocks
    ///
    /// `f` runs under the write lock; logging through this logger from inside
    /// it never returns.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut dyn Sink) -> R) -> R {
        let mut state = self.state.lock();
        f(state.sink.as_mut())
    }

    pub fn sink_name(&self) -> String {
        self.with_sink(|sink| sink.name().to_string())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.with_sink(|sink| sink.flush())
    }

    // ------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------

    /// Header for `level` stamped with the current time.
    pub fn build_header(&self, level: LogLevel) -> Vec<u8> {
        self.header_at(level, Utc::now())
    }

    /// Header for `level` stamped with `at`.
    pub fn header_at(&self, level: LogLevel, at: DateTime<Utc>) -> Vec<u8> {
        let mut buf = Vec::new();
        header::write_header(&mut buf, level, &self.formatter(), at);
        buf
    }

    // ------------------------------------------------------------------
    // Writing
    // ------------------------------------------------------------------

    /// Format and write one line regardless of the threshold.
    ///
    /// Sink and formatting failures are returned to the caller. `message` is
    /// rendered under the write lock, so its `Display` impl must not log
    /// through this logger.
    pub fn write(&self, level: LogLevel, message: impl fmt::Display) -> Result<()> {
        self.emit(level, &message, None)
    }

    /// Like [`Logger::write`] with a fixed timestamp.
    pub fn write_at(
        &self,
        level: LogLevel,
        message: impl fmt::Display,
        at: DateTime<Utc>,
    ) -> Result<()> {
        self.emit(level, &message, Some(at))
    }

    fn emit(
        &self,
        level: LogLevel,
        message: &dyn fmt::Display,
        at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let mut guard = self.state.lock();
        let SinkState { sink, buf } = &mut *guard;
        let format = self.formatter();

        buf.clear();
        if format.show_header {
            let now = match at {
                Some(at) => at,
                None if format.shows_timestamp() => Utc::now(),
                None => DateTime::<Utc>::default(),
            };
            header::write_header(buf, level, &format, now);
        }

        let painted = format.color && level == LogLevel::Error;
        if painted {
            buf.extend_from_slice(ansi::fg(colored::Color::Red).as_bytes());
        }
        if let Err(e) = write!(ByteWriter(buf), "{}", message) {
            self.metrics.record_failed();
            return Err(LoggerError::from(e));
        }
        if painted {
            buf.extend_from_slice(ansi::RESET.as_bytes());
        }
        buf.push(b'\n');

        match sink.write_all(buf) {
            Ok(()) => {
                self.metrics.record_written(buf.len());
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed();
                Err(e)
            }
        }
    }

    /// Write `message` at `level` if the level is enabled.
    ///
    /// The message is not rendered for disabled levels. Sink errors are
    /// counted in [`Logger::metrics`] and otherwise ignored.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }

        let _ = self.emit(level, &message, None);
    }

    /// Write `message` at ERROR level, then terminate the process.
    ///
    /// The process exits with status [`FATAL_EXIT_CODE`] even if the write
    /// failed. Use [`Logger::log`] with [`LogLevel::Error`] to record an
    /// error without exiting.
    pub fn error(&self, message: impl fmt::Display) -> ! {
        self.log(LogLevel::Error, message);
        let _ = self.flush();
        std::process::exit(FATAL_EXIT_CODE)
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }
}

impl Default for Logger {
    /// Logger on stderr at INFO with default formatting.
    fn default() -> Self {
        Self::new(ConsoleSink::stderr(), LogLevel::Info)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let state = self.state.get_mut();
        if let Err(e) = state.sink.flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush sink '{}' during shutdown: {}",
                state.sink.name(),
                e
            );
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("format", &self.formatter())
            .field("sink", &self.sink_name())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_color_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .threshold(LogLevel::Debug)
///     .sink(ConsoleSink::stdout())
///     .formatter(FormatterConfig::new().with_show_microseconds(true))
///     .build();
/// assert!(logger.is_debug());
/// ```
pub struct LoggerBuilder {
    threshold: LogLevel,
    sink: Option<Box<dyn Sink>>,
    format: FormatterConfig,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::Info,
            sink: None,
            format: FormatterConfig::default(),
        }
    }

    /// Set minimum level
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    /// Set minimum level from a numeric verbosity, clamped to the valid range
    #[must_use = "builder methods return a new value"]
    pub fn verbosity(mut self, verbosity: i64) -> Self {
        self.threshold = LogLevel::from_verbosity(verbosity);
        self
    }

    /// Set the output sink (stderr when unset)
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, format: FormatterConfig) -> Self {
        self.format = format;
        self
    }

    /// Apply threshold and formatting from a loaded configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.threshold = config.threshold;
        self.format = config.format;
        self
    }

    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::stderr()));
        Logger::with_parts(sink, self.threshold, self.format)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a new builder for configuring a Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
