//! Adapter from any `std::io::Write` to a [`Sink`]

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;

/// Wraps an arbitrary writer (socket, pipe, `Vec<u8>`, ...) as a sink.
///
/// ```
/// use rust_color_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .sink(WriterSink::new(Vec::<u8>::new()))
///     .formatter(FormatterConfig::plain())
///     .build();
/// logger.info("into a vector");
/// ```
pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named(writer, "writer")
    }

    pub fn named(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.writer.write_all(buf).map_err(|e| {
            LoggerError::io_operation(format!("writing to sink '{}'", self.name), e.to_string(), e)
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
