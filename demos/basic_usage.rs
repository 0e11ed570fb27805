//! Basic logger usage example
//!
//! Demonstrates the default logger, threshold changes, raw print and
//! conditional error logging.
//!
//! Run with: cargo run --example basic_usage

use eslog::prelude::*;
use eslog::{info, log_if_errorf};
use std::fmt::Display;

fn main() -> Result<()> {
    println!("=== eslog - Basic Usage Example ===\n");

    println!("1. Logging at different levels through the default logger:");
    eslog::debug(&[&"This is a debug message"]);
    eslog::info(&[&"Listening on port", &8080]);
    eslog::warnf(format_args!("cache {}% full", 93));
    eslog::error(&[&"This is an error message"]);

    println!("\n2. Raising the threshold to WARN:");
    eslog::set_level("warn")?;
    eslog::debug(&[&"Debug message (hidden)"]);
    eslog::info(&[&"Info message (hidden)"]);
    eslog::warn(&[&"Warning message (visible)"]);
    eslog::default_logger().log(Level::new(Level::WARN.value() + 2), "between WARN and ERROR")?;

    println!("\n3. Raw print ignores the threshold:");
    eslog::set_level("fatal")?;
    eslog::println(&[&"progress: ", &42, &"%"]);
    eslog::set_level("debug")?;

    println!("\n4. Conditional logging:");
    let ok: std::result::Result<(), std::io::Error> = Ok(());
    let failed: std::result::Result<(), std::io::Error> =
        Err(std::io::Error::other("connection reset"));
    eslog::log_if_error(ok.as_ref().err(), eslog::error, &[]);
    eslog::log_if_error(failed.as_ref().err(), eslog::error, &[]);
    log_if_errorf!(failed.as_ref().err(), eslog::errorf, "upstream failed: {}");

    println!("\n5. A JSON logger with attributes:");
    let logger = Logger::builder()
        .format(OutputFormat::Json)
        .writer(std::io::stdout())
        .build()
        .with_attrs(vec![field("service", "billing")]);
    info!(logger, "invoice {} sent", 1042)?;
    logger
        .with_group("request")
        .log_attrs(Level::INFO, "handled", vec![field("status", 200)])?;

    let parts: [&dyn Display; 2] = [&"done", &true];
    logger.info(eslog::join_args(&parts))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
