//! In-memory sink for capturing output

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Collects written bytes in shared memory.
///
/// Clones share the same buffer, so a clone kept outside the logger can
/// inspect what was written.
#[derive(Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
    write_calls: Arc<AtomicUsize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Output decoded as UTF-8, lossily
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Output split into lines, terminators removed
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Number of `write_all` calls received
    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
        self.write_calls.store(0, Ordering::SeqCst);
    }
}

impl Sink for MemorySink {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.buffer.lock().extend_from_slice(buf);
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
