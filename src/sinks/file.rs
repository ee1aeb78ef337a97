//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sink appending records to a file.
///
/// Output is buffered and pushed to the file at the end of every record.
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Open `path` for appending, creating it when missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_failed(&self, e: std::io::Error) -> LoggerError {
        LoggerError::io_operation(
            "write record",
            format!("Failed to write to {}: {}", self.path.display(), e),
            e,
        )
    }
}

impl Sink for FileSink {
    fn write_str(&self, text: &str) -> Result<()> {
        self.writer
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| self.write_failed(e))
    }

    fn end_line(&self) -> Result<()> {
        let mut writer = self.writer.lock();
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(|e| self.write_failed(e))
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.get_mut().flush();
    }
}
