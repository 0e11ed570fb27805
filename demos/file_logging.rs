//! File logging example
//!
//! Demonstrates pointing the default logger at a file and building a
//! JSON logger from a configuration document.
//!
//! Run with: cargo run --example file_logging

use eslog::prelude::*;
use std::fs::{File, OpenOptions};

fn main() -> Result<()> {
    println!("=== eslog - File Logging Example ===\n");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("application.log")?;

    println!("1. Redirecting the default logger to application.log:");
    eslog::set_output(file);
    eslog::set_level("info")?;

    eslog::info(&[&"Application started"]);
    eslog::debug(&[&"Loading configuration... (filtered)"]);
    eslog::warn(&[&"Using default settings for some options"]);

    for i in 1..=5 {
        eslog::infof(format_args!("Processing item {}/5", i));
    }
    eslog::default_logger().flush()?;

    println!("\n2. A JSON logger configured from a document:");
    let config: Config = serde_json::from_str(
        r#"{"level":"WARN","format":"json","timestamp_format":"UnixMillis"}"#,
    )?;
    let logger = Logger::new(config, File::create("application.json.log")?);
    logger.info("filtered")?;
    logger.error("Failed to load optional plugin")?;
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'application.json.log' for the output");

    Ok(())
}
