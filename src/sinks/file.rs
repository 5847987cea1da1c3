//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends lines to a file.
///
/// Each line is written under an exclusive advisory lock and flushed before
/// the lock is released, so several processes can share one log file.
pub struct FileSink {
    file: File,
    path: PathBuf,
    name: String,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(path.display().to_string(), e.to_string()))?;
        let name = format!("file:{}", path.display());

        Ok(Self { file, path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_locked(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.file.write_all(buf)?;
        self.file.flush()
    }
}

impl Sink for FileSink {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.file
            .lock_exclusive()
            .map_err(|_| LoggerError::file_lock(self.path.display().to_string()))?;

        let written = self.write_locked(buf);
        let unlocked = FileExt::unlock(&self.file);

        written.map_err(|e| {
            LoggerError::io_operation(
                format!("writing to '{}'", self.path.display()),
                e.to_string(),
                e,
            )
        })?;
        unlocked?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
