//! Logging macros for writing a whole record in one call.
//!
//! Each macro starts a record on the given logger, appends every
//! `key => value` pair in order and lets the record go out of scope, which
//! writes it.
//!
//! # Examples
//!
//! ```
//! use rust_record_logger::prelude::*;
//! use rust_record_logger::info;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::with_sink(sink.clone());
//!
//! info!(logger, "msg" => "Server started", "port" => 8080);
//!
//! assert!(sink.lines()[0].ends_with("level=INFO msg=\"Server started\" port=8080}"));
//! ```

/// Write a record at an explicit level.
///
/// Keys and values are appended one field at a time, so a value expression
/// that panics leaves its key as the record's trailing token.
///
/// # Examples
///
/// ```
/// # use rust_record_logger::prelude::*;
/// # let logger = Logger::with_sink(std::sync::Arc::new(MemorySink::new()));
/// use rust_record_logger::log;
/// log!(logger, LogLevel::Info, "msg" => "Simple message");
/// log!(logger, LogLevel::Error, "code" => 500, "retry" => false);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        let record = $logger.record_at($level);
        $(
            let record = record.field($key);
            let record = record.field($value);
        )*
        drop(record);
    }};
}

/// Write a debug-level record.
///
/// # Examples
///
/// ```
/// # use rust_record_logger::prelude::*;
/// # let logger = Logger::with_sink(std::sync::Arc::new(MemorySink::new()));
/// use rust_record_logger::debug;
/// debug!(logger, "state" => "initialized", "counter" => 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $key => $value)*)
    };
}

/// Write an info-level record.
///
/// # Examples
///
/// ```
/// # use rust_record_logger::prelude::*;
/// # let logger = Logger::with_sink(std::sync::Arc::new(MemorySink::new()));
/// use rust_record_logger::info;
/// info!(logger, "msg" => "Application started", "items" => 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $key => $value)*)
    };
}

/// Write a warning-level record.
///
/// # Examples
///
/// ```
/// # use rust_record_logger::prelude::*;
/// # let logger = Logger::with_sink(std::sync::Arc::new(MemorySink::new()));
/// use rust_record_logger::warn;
/// warn!(logger, "msg" => "Low disk space", "free_mb" => 512);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn $(, $key => $value)*)
    };
}

/// Write an error-level record.
///
/// # Examples
///
/// ```
/// # use rust_record_logger::prelude::*;
/// # let logger = Logger::with_sink(std::sync::Arc::new(MemorySink::new()));
/// use rust_record_logger::error;
/// error!(logger, "msg" => "Connection failed", "attempt" => 3);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $key => $value)*)
    };
}
