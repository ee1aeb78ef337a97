//! Basic record logging to standard output and to a file

use rust_record_logger::prelude::*;
use rust_record_logger::{info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    let mut logger = Logger::new();

    logger.field("msg").field("hello").field("pid").field(std::process::id());
    logger.debug().pair("stage", "startup").pair("ready", true);
    info!(logger, "msg" => "macro form", "attempt" => 1);

    let path = std::env::temp_dir().join("rust_record_logger_demo.log");
    logger.set_sink(Arc::new(FileSink::open(&path)?));
    logger.set_level(LogLevel::Warn);

    warn!(logger, "msg" => "written to file", "path" => path.display().to_string());
    println!("Wrote {} record(s) to {}", logger.metrics().records_written(), path.display());

    Ok(())
}
