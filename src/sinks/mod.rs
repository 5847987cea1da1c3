//! Sink implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;
pub mod writer;

pub use console::{ConsoleSink, ConsoleStream};
#[cfg(feature = "file")]
pub use file::FileSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

pub use crate::core::Sink;
