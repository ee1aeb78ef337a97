//! Core record types and traits

pub mod config;
pub mod error;
pub mod field;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod sink;
pub mod sink_lock;

pub use config::{LoggerConfig, SinkTarget};
pub use error::{LoggerError, Result};
pub use field::FieldValue;
pub use log_level::{level_name, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::Record;
pub use sink::{Sink, SinkId};
pub use sink_lock::{SinkLock, SinkLockTable};
