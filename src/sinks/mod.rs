//! Sink implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;
pub mod writer;

#[cfg(feature = "console")]
pub use console::{StderrSink, StdoutSink};
#[cfg(feature = "file")]
pub use file::FileSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

pub use crate::core::{Sink, SinkId};
