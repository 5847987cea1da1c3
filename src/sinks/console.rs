//! Console sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;

/// Standard stream a [`ConsoleSink`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes every line straight to stdout or stderr, flushing after each one.
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout)
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Sink for ConsoleSink {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let result = match self.stream {
            ConsoleStream::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(buf).and_then(|()| out.flush())
            }
            ConsoleStream::Stderr => {
                let mut err = std::io::stderr().lock();
                err.write_all(buf).and_then(|()| err.flush())
            }
        };
        result.map_err(|e| {
            LoggerError::io_operation(format!("writing to {}", self.name()), e.to_string(), e)
        })
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}
