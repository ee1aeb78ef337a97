//! Adapter turning any `io::Write` into a sink

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Sink over an arbitrary writer.
///
/// # Example
///
/// ```
/// use rust_record_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(WriterSink::new(Vec::<u8>::new()));
/// Record::begin(sink.clone(), LogLevel::Info).field("k").field(1);
///
/// let bytes = sink.with_writer(|w| w.clone());
/// assert!(String::from_utf8(bytes).unwrap().ends_with("k=1}\n"));
/// ```
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named(writer, "writer")
    }

    pub fn named(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            name: name.into(),
        }
    }

    /// Run `f` with exclusive access to the underlying writer
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_failed(&self, e: io::Error) -> LoggerError {
        LoggerError::io_operation(
            "write record",
            format!("Failed to write to sink '{}': {}", self.name, e),
            e,
        )
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
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
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_reach_inner_writer() {
        let sink = WriterSink::named(Vec::new(), "vec");
        sink.write_str("abc").unwrap();
        sink.end_line().unwrap();
        assert_eq!(sink.name(), "vec");
        assert_eq!(sink.into_inner(), b"abc\n");
    }

    #[test]
    fn test_io_errors_carry_context() {
        let sink = WriterSink::named(BrokenPipe, "pipe");
        let err = sink.write_str("abc").unwrap_err();
        match err {
            LoggerError::IoOperation {
                ref operation,
                ref message,
                ref source,
            } => {
                assert_eq!(operation, "write record");
                assert!(message.contains("'pipe'"));
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = sink.end_line().unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
