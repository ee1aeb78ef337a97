//! Standard output and standard error sinks

use crate::core::{LoggerError, Result, Sink, SinkId};
use std::io::{self, Write};

fn write_failed(stream: &str, e: io::Error) -> LoggerError {
    LoggerError::io_operation("write record", format!("Failed to write to {}: {}", stream, e), e)
}

/// Sink writing to the process's standard output.
///
/// Every instance shares [`SinkId::STDOUT`], so records from any number of
/// `StdoutSink` values are serialized against each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_str(&self, text: &str) -> Result<()> {
        io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| write_failed("stdout", e))
    }

    fn end_line(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(b"\n")
            .and_then(|()| out.flush())
            .map_err(|e| write_failed("stdout", e))
    }

    fn name(&self) -> &str {
        "stdout"
    }

    fn id(&self) -> SinkId {
        SinkId::STDOUT
    }
}

/// Sink writing to the process's standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write_str(&self, text: &str) -> Result<()> {
        io::stderr()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| write_failed("stderr", e))
    }

    fn end_line(&self) -> Result<()> {
        let mut err = io::stderr().lock();
        err.write_all(b"\n")
            .and_then(|()| err.flush())
            .map_err(|e| write_failed("stderr", e))
    }

    fn name(&self) -> &str {
        "stderr"
    }

    fn id(&self) -> SinkId {
        SinkId::STDERR
    }
}
