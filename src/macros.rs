//! Logging macros for ergonomic log message formatting.
//!
//! These macros take a [`Logger`](crate::Logger) followed by `format!`-style
//! arguments. The message is passed on as [`std::fmt::Arguments`], so nothing
//! is allocated when the level is filtered out.
//!
//! # Examples
//!
//! ```
//! use eslog::prelude::*;
//! use eslog::info;
//!
//! let logger = Logger::new(Config::default(), MemoryWriter::new());
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use eslog::prelude::*;
/// # let logger = Logger::new(Config::default(), MemoryWriter::new());
/// use eslog::log;
/// log!(logger, Level::INFO, "Simple message").unwrap();
/// log!(logger, Level::new(Level::ERROR.value() + 2), "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use eslog::prelude::*;
/// # let logger = Logger::new(Config::default(), MemoryWriter::new());
/// use eslog::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::WARN, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($arg)+)
    };
}

/// Log a fatal-level message and run the logger's fatal hook.
///
/// With the default hook the process exits with status 1.
///
/// # Examples
///
/// ```
/// # use eslog::prelude::*;
/// # use std::sync::Arc;
/// # let logger = Logger::builder()
/// #     .writer(MemoryWriter::new())
/// #     .fatal_hook(Arc::new(|_code: i32| {}))
/// #     .build();
/// use eslog::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}

/// Log a debug-level message with a trailing newline appended to it.
///
/// ```
/// # use eslog::prelude::*;
/// # let logger = Logger::new(Config::default(), MemoryWriter::new());
/// eslog::debugln!(logger, "step {}", 1).unwrap();
/// ```
#[macro_export]
macro_rules! debugln {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug_ln(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infoln {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info_ln(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnln {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn_ln(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorln {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error_ln(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatalln {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_ln(format_args!($($arg)+))
    };
}

/// Write formatted text verbatim through the logger, bypassing the threshold.
///
/// ```
/// # use eslog::prelude::*;
/// let out = MemoryWriter::new();
/// let logger = Logger::new(Config::default().with_level(Level::FATAL), out.clone());
/// eslog::printf!(logger, "{}%", 42).unwrap();
/// assert_eq!(out.contents(), "42%");
/// ```
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(format_args!($($arg)+))
    };
}

/// Call `emit` with a formatted message only when `err` is `Some`.
///
/// Without extra arguments the error itself fills the format string's
/// single placeholder. `emit` receives [`std::fmt::Arguments`], which fits
/// the crate-root `*f` functions such as [`errorf`](crate::errorf).
///
/// ```
/// use eslog::log_if_errorf;
///
/// let mut seen = Vec::new();
/// let failure: Result<(), std::io::Error> = Err(std::io::Error::other("timeout"));
///
/// log_if_errorf!(failure.as_ref().err(), |args: std::fmt::Arguments<'_>| seen.push(args.to_string()), "request failed: {}");
/// log_if_errorf!(failure.as_ref().err(), |args: std::fmt::Arguments<'_>| seen.push(args.to_string()), "retry {} of {}", 1, 3);
/// log_if_errorf!(None::<&std::io::Error>, |args: std::fmt::Arguments<'_>| seen.push(args.to_string()), "{}");
///
/// assert_eq!(seen, vec!["request failed: timeout", "retry 1 of 3"]);
/// ```
#[macro_export]
macro_rules! log_if_errorf {
    ($err:expr, $emit:expr, $fmt:literal $(,)?) => {
        if let Some(err) = $err {
            ($emit)(format_args!($fmt, err))
        }
    };
    ($err:expr, $emit:expr, $fmt:literal, $($arg:tt)+) => {
        if $err.is_some() {
            ($emit)(format_args!($fmt, $($arg)+))
        }
    };
}
