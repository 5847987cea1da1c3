//! Logger metrics for observability
//!
//! Counts what reached the sink and what failed to. Suppressed (gated out)
//! calls are not counted: a disabled level does no work at all.

use std::sync::atomic::{AtomicU64, Ordering};

/// Write statistics for one logger
///
/// # Example
///
/// ```
/// use rust_color_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written(12);
/// metrics.record_failed();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.bytes_written(), 12);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the sink successfully
    lines_written: AtomicU64,

    /// Total bytes of those lines, escape sequences included
    bytes_written: AtomicU64,

    /// Sink writes that returned an error
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a line of `bytes` length written to the sink
    #[inline]
    pub fn record_written(&self, bytes: usize) -> u64 {
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed sink write
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Get failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.bytes_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            bytes_written: AtomicU64::new(self.bytes_written()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
