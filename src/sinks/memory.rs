//! In-memory sink for capturing records

use crate::core::{Result, Sink};
use parking_lot::Mutex;

/// Sink that keeps every written byte in memory.
///
/// Useful for tests and for handing captured records to another system.
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Completed lines, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_str(&self, text: &str) -> Result<()> {
        self.buffer.lock().push_str(text);
        Ok(())
    }

    fn end_line(&self) -> Result<()> {
        self.buffer.lock().push('\n');
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
