//! # Rust Record Logger
//!
//! A chainable key/value record logger. Fields are appended one at a time to
//! a [`Record`]; when the last handle of a chain goes out of scope the record
//! is written to its sink as a single line:
//!
//! ```text
//! {timestamp=1736332245123 level=INFO msg="hello" pid=12}
//! ```
//!
//! ## Features
//!
//! - **Exactly Once**: each chain is written once, with every appended field
//! - **Serialized Sinks**: records sharing a sink never interleave
//! - **Partial Records**: a chain abandoned by `?` or a panic still writes
//!   the fields it already has
//!
//! ```
//! use rust_record_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::with_sink(sink.clone());
//!
//! logger.info().field("msg").field("hello").field("pid").field(12);
//!
//! assert!(sink.lines()[0].ends_with("level=INFO msg=\"hello\" pid=12}"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::{StderrSink, StdoutSink};
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{MemorySink, WriterSink};
    pub use crate::core::{
        FieldValue, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Record, Result, Sink, SinkId, SinkTarget,
    };
}

#[cfg(feature = "console")]
pub use sinks::{StderrSink, StdoutSink};
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{MemorySink, WriterSink};
pub use crate::core::{
    level_name, FieldValue, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Record, Result, Sink, SinkId, SinkLockTable, SinkTarget,
};
