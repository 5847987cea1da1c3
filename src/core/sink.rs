//! Sink trait for log output destinations

use super::error::Result;

/// Destination for fully formatted log lines.
///
/// The logger hands each line to [`Sink::write_all`] in a single call while
/// holding its lock, so implementations need no synchronization of their own.
pub trait Sink: Send {
    /// Write one complete block of bytes.
    fn write_all(&mut self, buf: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write_all(buf)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
