//! Serializable logger configuration

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::sink::Sink;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Where records of a configured logger go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkTarget {
    #[default]
    Stdout,
    Stderr,
    File { path: PathBuf },
}

impl SinkTarget {
    /// Open the destination described by this target
    pub fn open(&self) -> Result<Arc<dyn Sink>> {
        match self {
            #[cfg(feature = "console")]
            SinkTarget::Stdout => Ok(Arc::new(crate::sinks::StdoutSink::new())),
            #[cfg(feature = "console")]
            SinkTarget::Stderr => Ok(Arc::new(crate::sinks::StderrSink::new())),
            #[cfg(feature = "file")]
            SinkTarget::File { path } => Ok(Arc::new(crate::sinks::FileSink::open(path.clone())?)),
            #[allow(unreachable_patterns)]
            other => Err(LoggerError::config(
                "sink",
                format!("{:?} support is not compiled in", other),
            )),
        }
    }
}

/// Logger configuration
///
/// # Example
///
/// ```
/// use rust_record_logger::core::{LoggerConfig, SinkTarget};
/// use rust_record_logger::LogLevel;
///
/// let config = LoggerConfig::from_json(r#"{ "level": "warn", "sink": { "type": "stderr" } }"#)
///     .unwrap();
/// assert_eq!(config.level, LogLevel::Warn);
/// assert_eq!(config.sink, SinkTarget::Stderr);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub sink: SinkTarget,
}

impl LoggerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let SinkTarget::File { ref path } = self.sink {
            if path.as_os_str().is_empty() {
                return Err(LoggerError::config("sink", "file path must not be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.sink, SinkTarget::Stdout);
    }

    #[test]
    fn test_file_target() {
        let config =
            LoggerConfig::from_json(r#"{ "level": "error", "sink": { "type": "file", "path": "/tmp/x.log" } }"#)
                .unwrap();
        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(
            config.sink,
            SinkTarget::File {
                path: PathBuf::from("/tmp/x.log")
            }
        );
    }

    #[test]
    fn test_empty_file_path_is_rejected() {
        let err = LoggerConfig::from_json(r#"{ "sink": { "type": "file", "path": "" } }"#)
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = LoggerConfig::from_json(r#"{ "level": "loud" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        let config = LoggerConfig {
            level: LogLevel::Debug,
            sink: SinkTarget::Stderr,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"level":"debug","sink":{"type":"stderr"}}"#);
    }
}
