//! # eslog
//!
//! A leveled logging facade over structured `key=value`/JSON handlers.
//!
//! ## Features
//!
//! - **FATAL level**: logs above ERROR, then terminates through a replaceable hook
//! - **Raw print**: `print`/`printf`/`println` write the message bytes verbatim,
//!   never filtered and never decorated
//! - **Shared threshold**: one atomic level cell consulted by every logger
//!   derived from it, adjustable at runtime from a level name
//! - **Conditional logging**: `log_if_error` only emits when an error is present
//!
//! ## Default logger
//!
//! The free functions in this crate log through a process-wide default
//! [`Logger`] that starts out writing text to standard output at `DEBUG`.
//!
//! ```
//! use eslog::MemoryWriter;
//!
//! let out = MemoryWriter::new();
//! eslog::set_output(out.clone());
//! eslog::set_level("info").unwrap();
//!
//! eslog::debug(&[&"skip"]);
//! eslog::info(&[&"shown", &1]);
//! eslog::println(&[&"raw ", &"line"]);
//!
//! let text = out.contents();
//! assert!(!text.contains("skip"));
//! assert!(text.contains("msg=\"shown 1\""));
//! assert!(text.ends_with("raw line\n"));
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        field, Attr, Config, FatalHook, FieldValue, Handler, HandlerOptions, Level, LevelVar,
        LogContext, Logger, LoggerBuilder, LoggerError, MemoryWriter, OutputFormat, Record,
        ReplaceAttr, Result, SharedWriter, TimestampFormat,
    };
    pub use crate::handlers::{JsonHandler, PrintAwareHandler, TextHandler};
}

pub use crate::core::{
    exit_process, field, join_args, label_replacer, parse_level, resolve_level_label, sprint,
    Attr, Config, FatalHook, FieldValue, Handler, HandlerOptions, Level, LevelVar, LogContext,
    Logger, LoggerBuilder, LoggerError, MemoryWriter, OutputFormat, Record, ReplaceAttr, Result,
    SharedWriter, TimestampFormat, FATAL_EXIT_CODE, LEVEL_KEY, MESSAGE_KEY, TIME_KEY,
};
pub use handlers::{JsonHandler, PrintAwareHandler, TextHandler};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt::{self, Display};
use std::io::Write;

static DEFAULT_LOGGER: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(Logger::default()));

/// Handle to the current default logger
pub fn default_logger() -> Logger {
    DEFAULT_LOGGER.read().clone()
}

/// Install `logger` as the default logger
pub fn set_default(logger: Logger) {
    *DEFAULT_LOGGER.write() = logger;
}

/// Build a fresh text logger at level `level` writing to `writer`.
///
/// The result is independent of the default logger.
pub fn configure<W: Write + Send + 'static>(level: &str, writer: W) -> Result<Logger> {
    let level = parse_level(level)?;
    Ok(Logger::new(Config::new().with_level(level), writer))
}

/// Replace the default logger with one writing to `writer`.
///
/// Handles obtained earlier from [`default_logger`] keep writing to the
/// old destination; the threshold stays shared.
pub fn set_output<W: Write + Send + 'static>(writer: W) {
    let mut slot = DEFAULT_LOGGER.write();
    let replacement = slot.with_output(writer);
    *slot = replacement;
}

/// Change the shared threshold of the default logger
pub fn set_level(name: &str) -> Result<()> {
    default_logger().set_level(name)
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("[LOGGER ERROR] Failed to write log record: {}", e);
    }
}

/// Log at DEBUG; `args` are joined with a single space
pub fn debug(args: &[&dyn Display]) {
    report(default_logger().debug(join_args(args)));
}

/// Log at INFO; `args` are joined with a single space
pub fn info(args: &[&dyn Display]) {
    report(default_logger().info(join_args(args)));
}

/// Log at WARN; `args` are joined with a single space
pub fn warn(args: &[&dyn Display]) {
    report(default_logger().warn(join_args(args)));
}

/// Log at ERROR; `args` are joined with a single space
pub fn error(args: &[&dyn Display]) {
    report(default_logger().error(join_args(args)));
}

/// Log at FATAL and terminate through the default logger's fatal hook
pub fn fatal(args: &[&dyn Display]) {
    default_logger().fatal(join_args(args));
}

pub fn debugf(args: fmt::Arguments<'_>) {
    report(default_logger().debugf(args));
}

pub fn infof(args: fmt::Arguments<'_>) {
    report(default_logger().infof(args));
}

pub fn warnf(args: fmt::Arguments<'_>) {
    report(default_logger().warnf(args));
}

pub fn errorf(args: fmt::Arguments<'_>) {
    report(default_logger().errorf(args));
}

pub fn fatalf(args: fmt::Arguments<'_>) {
    default_logger().fatalf(args);
}

pub fn debug_ln(args: &[&dyn Display]) {
    report(default_logger().debug_ln(join_args(args)));
}

pub fn info_ln(args: &[&dyn Display]) {
    report(default_logger().info_ln(join_args(args)));
}

pub fn warn_ln(args: &[&dyn Display]) {
    report(default_logger().warn_ln(join_args(args)));
}

pub fn error_ln(args: &[&dyn Display]) {
    report(default_logger().error_ln(join_args(args)));
}

pub fn fatal_ln(args: &[&dyn Display]) {
    default_logger().fatal_ln(join_args(args));
}

/// Write the concatenation of `args` verbatim
pub fn print(args: &[&dyn Display]) {
    report(default_logger().print(args));
}

pub fn printf(args: fmt::Arguments<'_>) {
    report(default_logger().printf(args));
}

/// Write the concatenation of `args` plus one newline
pub fn println(args: &[&dyn Display]) {
    report(default_logger().println(args));
}

/// Call `emit` only when `err` is present.
///
/// `args` are forwarded when non-empty; otherwise the error itself is the
/// only argument.
///
/// ```
/// use eslog::{log_if_error, MemoryWriter};
/// use std::fmt::Display;
///
/// let mut seen = Vec::new();
/// let failure: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
///
/// log_if_error(failure.as_ref().err(), |args: &[&dyn Display]| seen.push(eslog::join_args(args)), &[]);
/// log_if_error(None::<&std::io::Error>, |args: &[&dyn Display]| seen.push(eslog::join_args(args)), &[&"x"]);
///
/// assert_eq!(seen, vec!["disk full".to_string()]);
/// ```
pub fn log_if_error<E, F>(err: Option<&E>, emit: F, args: &[&dyn Display])
where
    E: Display + ?Sized,
    F: FnOnce(&[&dyn Display]),
{
    if let Some(err) = err {
        if args.is_empty() {
            emit(&[&err as &dyn Display]);
        } else {
            emit(args);
        }
    }
}
