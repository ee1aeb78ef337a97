//! A field expression that fails part way through a record
//!
//! The fields appended before the failure are still written as a closed
//! record.

use rust_record_logger::prelude::*;

fn compute() -> i32 {
    panic!("could not compute field");
}

fn fallible(input: &str) -> Result<i32> {
    input
        .parse()
        .map_err(|_| LoggerError::other(format!("not a number: {}", input)))
}

fn log_fallible(logger: &Logger, input: &str) -> Result<()> {
    logger.info().field("msg").field("parsed").field("value").field(fallible(input)?);
    Ok(())
}

fn main() {
    let logger = Logger::new();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger
            .field("msg")
            .field("starting")
            .field(compute())
            .field("pid")
            .field(12)
            .field("version")
            .field("1.0.0");
    }));
    if result.is_err() {
        println!("first failure occurred");
    }

    if let Err(e) = log_fallible(&logger, "twelve") {
        println!("second failure occurred: {}", e);
    }
}
