//! Chainable record builder
//!
//! A [`Record`] is a lightweight handle. The first appended field allocates
//! a shared chain holding the text buffer and the completion flag; every
//! handle derived from it afterwards aliases that same chain. When the last
//! handle referencing a chain is dropped, the chain is finalized: the buffer
//! is closed with `}` and written to the sink under the sink's lock, exactly
//! once. The chain's memory is released right after that.
//!
//! Dropping is the trigger, so early returns through `?` and panics that
//! unwind past a half-built record still emit whatever was appended so far.

use super::field::{write_token, FieldValue, Position};
use super::log_level::LogLevel;
use super::metrics::LoggerMetrics;
use super::sink::Sink;
use super::sink_lock;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared state of one chain.
struct Chain {
    buffer: Mutex<String>,
    flushed: AtomicBool,
    sink: Arc<dyn Sink>,
    metrics: Option<Arc<LoggerMetrics>>,
}

impl Chain {
    fn new(
        sink: Arc<dyn Sink>,
        level: LogLevel,
        metrics: Option<Arc<LoggerMetrics>>,
    ) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let buffer = format!("{{timestamp={} level={} ", timestamp, level.to_str());

        Self {
            buffer: Mutex::new(buffer),
            flushed: AtomicBool::new(false),
            sink,
            metrics,
        }
    }

    fn append(&self, value: &FieldValue, position: Position) {
        let mut buffer = self.buffer.lock();
        write_token(&mut buffer, value, position);
    }

    fn is_flushed(&self) -> bool {
        self.flushed.load(Ordering::Acquire)
    }

    /// Close the buffer and write it to the sink, once.
    fn finalize(&self) {
        if self.is_flushed() {
            return;
        }

        let lock = sink_lock::lock_for(self.sink.id());
        let _guard = lock.lock();

        if self.is_flushed() {
            return;
        }

        let mut buffer = self.buffer.lock();
        // The buffer always ends with the separator of its last token.
        buffer.pop();
        buffer.push('}');

        let result = self
            .sink
            .write_str(&buffer)
            .and_then(|()| self.sink.end_line());

        self.flushed.store(true, Ordering::Release);

        match result {
            Ok(()) => {
                if let Some(ref metrics) = self.metrics {
                    metrics.record_written();
                }
            }
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Failed to write record to sink '{}': {}",
                    self.sink.name(),
                    e
                );
                if let Some(ref metrics) = self.metrics {
                    metrics.record_failure();
                }
            }
        }
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        self.finalize();
    }
}

/// One value in a record chain.
///
/// # Example
///
/// ```
/// use rust_record_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
///
/// Record::begin(sink.clone(), LogLevel::Info)
///     .field("msg")
///     .field("hello")
///     .field("pid")
///     .field(12);
///
/// let line = &sink.lines()[0];
/// assert!(line.starts_with("{timestamp="));
/// assert!(line.ends_with(" level=INFO msg=\"hello\" pid=12}"));
/// ```
#[derive(Clone)]
pub struct Record {
    level: LogLevel,
    field_count: usize,
    sink: Arc<dyn Sink>,
    metrics: Option<Arc<LoggerMetrics>>,
    chain: Option<Arc<Chain>>,
}

impl Record {
    /// Start an empty chain. Nothing is allocated or written until the
    /// first field is appended.
    pub fn begin(sink: Arc<dyn Sink>, level: LogLevel) -> Self {
        Self {
            level,
            field_count: 0,
            sink,
            metrics: None,
            chain: None,
        }
    }

    /// Report writes and appends of this chain to `metrics`.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<LoggerMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Append one field and return the next value of the chain.
    ///
    /// Fields alternate key, value, key, value; whether `value` is a key or
    /// a value is decided by how many fields this handle has seen.
    pub fn field(&self, value: impl Into<FieldValue>) -> Record {
        let value = value.into();

        let chain = match self.chain {
            Some(ref chain) => Arc::clone(chain),
            None => Arc::new(Chain::new(
                Arc::clone(&self.sink),
                self.level,
                self.metrics.clone(),
            )),
        };

        chain.append(&value, Position::of(self.field_count));
        if let Some(ref metrics) = self.metrics {
            metrics.record_field();
        }

        Record {
            level: self.level,
            field_count: self.field_count + 1,
            sink: Arc::clone(&self.sink),
            metrics: self.metrics.clone(),
            chain: Some(chain),
        }
    }

    /// Append a key and its value.
    pub fn pair(&self, key: impl Into<FieldValue>, value: impl Into<FieldValue>) -> Record {
        self.field(key).field(value)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Number of fields appended along this handle's chain
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Write the chain now instead of waiting for the last handle to drop.
    ///
    /// Calling it again, from this or any other handle of the chain, does
    /// nothing, and the final drop no longer writes. Fields appended after
    /// the chain was written are counted but never emitted. On an empty
    /// root this is a no-op.
    pub fn finish(&self) {
        if let Some(ref chain) = self.chain {
            chain.finalize();
        }
    }

    /// Whether the chain has already been written by [`Record::finish`].
    /// Always `false` for an empty root.
    pub fn is_flushed(&self) -> bool {
        self.chain.as_ref().is_some_and(|chain| chain.is_flushed())
    }

    /// Whether both handles alias the same chain state.
    pub fn shares_chain_with(&self, other: &Record) -> bool {
        match (&self.chain, &other.chain) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("field_count", &self.field_count)
            .field("sink", &self.sink.name())
            .field("flushed", &self.is_flushed())
            .finish()
    }
}
