//! Sink trait for record output destinations

use super::error::Result;
use std::fmt;

/// Identity of an output destination.
///
/// Records that target sinks with equal ids are serialized against each
/// other by the sink lock table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(usize);

impl SinkId {
    /// The process's standard output.
    pub const STDOUT: SinkId = SinkId(1);
    /// The process's standard error.
    pub const STDERR: SinkId = SinkId(2);

    /// Identity derived from the address of a sink object.
    pub fn of<T: ?Sized>(sink: &T) -> Self {
        SinkId(sink as *const T as *const () as usize)
    }

    pub const fn from_raw(raw: usize) -> Self {
        SinkId(raw)
    }

    pub const fn as_raw(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sink#{:x}", self.0)
    }
}

/// A byte-oriented destination for finished records.
///
/// A sink does not have to make `write_str` followed by `end_line` atomic;
/// the record builder holds the sink's lock across both calls.
pub trait Sink: Send + Sync {
    fn write_str(&self, text: &str) -> Result<()>;

    /// Terminate the current line and push buffered bytes downstream.
    fn end_line(&self) -> Result<()>;

    fn name(&self) -> &str;

    /// Identity used to pick the sink's write lock.
    ///
    /// Defaults to the address of the sink object, so two sinks only share
    /// a lock when they are the same object. A sink that wraps a stream
    /// shared by the whole process, such as a second handle to standard
    /// output, must override this and return the stream's id
    /// (`SinkId::STDOUT` or `SinkId::STDERR`), as `StdoutSink` does.
    /// Otherwise its records can interleave with that stream's other sinks.
    fn id(&self) -> SinkId {
        SinkId::of(self)
    }
}
