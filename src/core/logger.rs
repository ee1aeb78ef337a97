//! Logger facade
//!
//! A [`Logger`] is a reusable starting point for record chains: it carries
//! the level and sink new records are stamped with, plus shared metrics.

use super::{
    config::{LoggerConfig, SinkTarget},
    error::Result, field::FieldValue, log_level::LogLevel,
    metrics::LoggerMetrics, record::Record, sink::Sink,
};
use std::sync::Arc;

pub struct Logger {
    level: LogLevel,
    sink: Arc<dyn Sink>,
    /// Metrics for observability (records written, failed writes, fields)
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Logger at `Info` writing to standard output
    #[cfg(feature = "console")]
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(crate::sinks::StdoutSink::new()))
    }

    #[must_use]
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            level: LogLevel::Info,
            sink,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Build a logger from a parsed configuration
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.validate()?;
        let mut logger = Self::with_sink(config.sink.open()?);
        logger.set_level(config.level);
        Ok(logger)
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Redirect records started after this call; chains already in flight
    /// keep the sink they began with.
    pub fn set_sink(&mut self, sink: Arc<dyn Sink>) {
        self.sink = sink;
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// Get the logger metrics
    ///
    /// # Example
    ///
    /// ```
    /// use rust_record_logger::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let logger = Logger::with_sink(Arc::new(MemorySink::new()));
    /// logger.field("msg").field("ready");
    ///
    /// assert_eq!(logger.metrics().records_written(), 1);
    /// assert_eq!(logger.metrics().fields_appended(), 2);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Empty record at the logger's level
    pub fn record(&self) -> Record {
        self.record_at(self.level)
    }

    pub fn record_at(&self, level: LogLevel) -> Record {
        Record::begin(Arc::clone(&self.sink), level).with_metrics(Arc::clone(&self.metrics))
    }

    /// Start a record at the logger's level with its first field
    pub fn field(&self, value: impl Into<FieldValue>) -> Record {
        self.record().field(value)
    }

    #[inline]
    pub fn debug(&self) -> Record {
        self.record_at(LogLevel::Debug)
    }

    #[inline]
    pub fn info(&self) -> Record {
        self.record_at(LogLevel::Info)
    }

    #[inline]
    pub fn warn(&self) -> Record {
        self.record_at(LogLevel::Warn)
    }

    #[inline]
    pub fn error(&self) -> Record {
        self.record_at(LogLevel::Error)
    }
}

#[cfg(feature = "console")]
impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_record_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .sink(Arc::new(MemorySink::new()))
///     .build()
///     .unwrap();
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            sink: None,
        }
    }

    /// Set the level stamped on records started with `Logger::record`
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the Logger, writing to standard output unless a sink was set.
    ///
    /// Fails when no sink was set and the `console` feature is disabled.
    pub fn build(self) -> Result<Logger> {
        let sink = match self.sink {
            Some(sink) => sink,
            None => SinkTarget::Stdout.open()?,
        };
        let mut logger = Logger::with_sink(sink);
        logger.set_level(self.level);
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
