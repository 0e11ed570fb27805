//! Core logger types and traits

pub mod config;
pub mod error;
pub mod handler;
pub mod level_var;
pub mod log_context;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod record;
pub mod timestamp;
pub mod writer;

pub use config::Config;
pub use error::{LoggerError, Result};
pub use handler::{
    label_replacer, resolve_level_label, Handler, HandlerOptions, ReplaceAttr, LEVEL_KEY,
    MESSAGE_KEY, TIME_KEY,
};
pub use level_var::LevelVar;
pub use log_context::{field, Attr, FieldValue, LogContext};
pub use log_level::{parse_level, Level};
pub use logger::{exit_process, join_args, sprint, FatalHook, Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use output_format::OutputFormat;
pub use record::Record;
pub use timestamp::TimestampFormat;
pub use writer::{MemoryWriter, SharedWriter};
