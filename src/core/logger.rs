//! Main logger implementation

use super::{
    config::Config,
    error::Result,
    handler::{label_replacer, Handler, HandlerOptions, ReplaceAttr},
    level_var::LevelVar,
    log_context::Attr,
    log_level::Level,
    output_format::OutputFormat,
    record::Record,
    timestamp::TimestampFormat,
    writer::SharedWriter,
};
use crate::handlers::{JsonHandler, PrintAwareHandler, TextHandler};
use std::fmt::{self, Display};
use std::io::Write;
use std::sync::Arc;

/// Exit status handed to the fatal hook
pub const FATAL_EXIT_CODE: i32 = 1;

/// Called after a FATAL record has been written and flushed.
///
/// The default hook exits the process with the given status. Tests and
/// embedding applications can install one that records the call instead.
pub type FatalHook = Arc<dyn Fn(i32) + Send + Sync>;

pub fn exit_process() -> FatalHook {
    Arc::new(|code: i32| std::process::exit(code))
}

/// Logger bound to one destination and one output format
///
/// Cloning is cheap and every clone shares the threshold cell, the writer
/// and the fatal hook. Changing the destination never mutates a logger:
/// [`Logger::with_output`] builds a replacement that keeps sharing the
/// threshold.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
    level: LevelVar,
    writer: SharedWriter,
    config: Config,
    replace_attr: Option<ReplaceAttr>,
    fatal_hook: FatalHook,
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl Logger {
    /// Build a logger from `config` writing to `writer`
    #[must_use]
    pub fn new<W: Write + Send + 'static>(config: Config, writer: W) -> Self {
        Self::builder().config(config).writer(writer).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use eslog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(Level::INFO)
    ///     .format(OutputFormat::Json)
    ///     .writer(MemoryWriter::new())
    ///     .build();
    /// assert!(!logger.is_enabled(Level::DEBUG));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    pub fn writer(&self) -> &SharedWriter {
        &self.writer
    }

    pub fn level_var(&self) -> &LevelVar {
        &self.level
    }

    /// Current threshold
    pub fn level(&self) -> Level {
        self.level.level()
    }

    /// Configuration with the live threshold filled in
    pub fn config(&self) -> Config {
        Config {
            level: self.level(),
            ..self.config.clone()
        }
    }

    /// Parse `name` and replace the shared threshold; on failure the
    /// previous threshold stays active
    pub fn set_level(&self, name: &str) -> Result<()> {
        self.level.set_from_str(name)
    }

    pub fn set_min_level(&self, level: Level) {
        self.level.set(level);
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Replacement logger writing to `writer`.
    ///
    /// The threshold cell, format and fatal hook carry over; attributes
    /// and groups added with [`Logger::with_attrs`]/[`Logger::with_group`]
    /// do not.
    #[must_use]
    pub fn with_output<W: Write + Send + 'static>(&self, writer: W) -> Logger {
        self.with_shared_output(SharedWriter::new(writer))
    }

    #[must_use]
    pub fn with_shared_output(&self, writer: SharedWriter) -> Logger {
        let mut builder = Logger::builder()
            .config(self.config.clone())
            .level_var(self.level.clone())
            .shared_writer(writer)
            .fatal_hook(Arc::clone(&self.fatal_hook));
        if let Some(replace) = &self.replace_attr {
            builder = builder.replace_attr(Arc::clone(replace));
        }
        #[cfg(feature = "console")]
        {
            builder = builder.colors(self.use_colors);
        }
        builder.build()
    }

    /// Derived logger adding `attrs` to every structured record
    #[must_use]
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Logger {
        Logger {
            handler: self.handler.with_attrs(attrs.into_iter().collect()),
            ..self.clone()
        }
    }

    /// Derived logger nesting following attributes under `name`
    #[must_use]
    pub fn with_group(&self, name: &str) -> Logger {
        Logger {
            handler: self.handler.with_group(name),
            ..self.clone()
        }
    }

    /// Emit `msg` at `level`; the message is only formatted when enabled
    pub fn log(&self, level: Level, msg: impl Display) -> Result<()> {
        self.log_attrs(level, msg, Vec::new())
    }

    pub fn log_attrs(
        &self,
        level: Level,
        msg: impl Display,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let record = Record::new(level, msg.to_string()).with_attrs(attrs);
        self.handler.handle(&record)
    }

    #[inline]
    pub fn debug(&self, msg: impl Display) -> Result<()> {
        self.log(Level::DEBUG, msg)
    }

    #[inline]
    pub fn info(&self, msg: impl Display) -> Result<()> {
        self.log(Level::INFO, msg)
    }

    #[inline]
    pub fn warn(&self, msg: impl Display) -> Result<()> {
        self.log(Level::WARN, msg)
    }

    #[inline]
    pub fn error(&self, msg: impl Display) -> Result<()> {
        self.log(Level::ERROR, msg)
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Level::DEBUG, args)
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Level::INFO, args)
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Level::WARN, args)
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Level::ERROR, args)
    }

    #[inline]
    pub fn debug_ln(&self, msg: impl Display) -> Result<()> {
        self.log(Level::DEBUG, format_args!("{}\n", msg))
    }

    #[inline]
    pub fn info_ln(&self, msg: impl Display) -> Result<()> {
        self.log(Level::INFO, format_args!("{}\n", msg))
    }

    #[inline]
    pub fn warn_ln(&self, msg: impl Display) -> Result<()> {
        self.log(Level::WARN, format_args!("{}\n", msg))
    }

    #[inline]
    pub fn error_ln(&self, msg: impl Display) -> Result<()> {
        self.log(Level::ERROR, format_args!("{}\n", msg))
    }

    /// Write `msg` at FATAL, flush, then hand [`FATAL_EXIT_CODE`] to the
    /// fatal hook. With the default hook this call does not return.
    ///
    /// The hook runs even when FATAL is below the threshold. Write errors
    /// cannot be returned from here and are reported on stderr.
    pub fn fatal(&self, msg: impl Display) {
        if let Err(e) = self.log(Level::FATAL, msg) {
            eprintln!("[LOGGER ERROR] Failed to write fatal record: {}", e);
        }
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        (self.fatal_hook)(FATAL_EXIT_CODE);
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.fatal(args);
    }

    pub fn fatal_ln(&self, msg: impl Display) {
        self.fatal(format_args!("{}\n", msg));
    }

    /// Write the concatenation of `args` verbatim: no separator, no level,
    /// no timestamp, no trailing newline
    pub fn print(&self, args: &[&dyn Display]) -> Result<()> {
        self.print_message(sprint(args))
    }

    pub fn printf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.print_message(args.to_string())
    }

    /// Like [`Logger::print`] followed by exactly one newline
    pub fn println(&self, args: &[&dyn Display]) -> Result<()> {
        let mut message = sprint(args);
        message.push('\n');
        self.print_message(message)
    }

    fn print_message(&self, message: String) -> Result<()> {
        self.handler.handle(&Record::new(Level::PRINT, message))
    }

    pub fn flush(&self) -> Result<()> {
        self.handler.flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("handler", &self.handler.name())
            .field("level", &self.level)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Concatenate `args` with no separator
pub fn sprint(args: &[&dyn Display]) -> String {
    args.iter().map(|arg| arg.to_string()).collect()
}

/// Join `args` with a single space
pub fn join_args(args: &[&dyn Display]) -> String {
    args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use eslog::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .level(Level::WARN)
///     .format(OutputFormat::Text)
///     .timestamp_format(TimestampFormat::Rfc3339)
///     .writer(std::io::stderr())
///     .fatal_hook(Arc::new(|code: i32| eprintln!("would exit with {}", code)))
///     .build();
/// ```
pub struct LoggerBuilder {
    config: Config,
    writer: Option<SharedWriter>,
    level_var: Option<LevelVar>,
    replace_attr: Option<ReplaceAttr>,
    fatal_hook: Option<FatalHook>,
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            writer: None,
            level_var: None,
            replace_attr: None,
            fatal_hook: None,
            #[cfg(feature = "console")]
            use_colors: false,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Initial threshold; ignored when [`LoggerBuilder::level_var`] is set
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    /// Destination; standard output when not set
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(SharedWriter::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_writer(mut self, writer: SharedWriter) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Share an existing threshold cell instead of creating one
    #[must_use = "builder methods return a new value"]
    pub fn level_var(mut self, level: LevelVar) -> Self {
        self.level_var = Some(level);
        self
    }

    /// Extra attribute rewrite hook, run after the level label is resolved
    #[must_use = "builder methods return a new value"]
    pub fn replace_attr(mut self, replace_attr: ReplaceAttr) -> Self {
        self.replace_attr = Some(replace_attr);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn fatal_hook(mut self, hook: FatalHook) -> Self {
        self.fatal_hook = Some(hook);
        self
    }

    #[cfg(feature = "console")]
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Like [`LoggerBuilder::build`], but rejects a configuration that
    /// cannot be rendered as given
    pub fn try_build(self) -> Result<Logger> {
        self.config.validate()?;
        Ok(self.build())
    }

    /// Build the Logger
    ///
    /// A custom timestamp pattern chrono cannot render falls back to
    /// ISO 8601; use [`LoggerBuilder::try_build`] to reject it instead.
    pub fn build(self) -> Logger {
        let mut config = self.config;
        let level = match self.level_var {
            Some(var) => {
                config.level = var.level();
                var
            }
            None => LevelVar::new(config.level),
        };
        let writer = self.writer.unwrap_or_default();

        let opts = HandlerOptions::new(level.clone())
            .with_replace_attr(label_replacer(self.replace_attr.clone()))
            .with_timestamp_format(config.timestamp_format.clone());

        let structured: Arc<dyn Handler> = match config.format {
            OutputFormat::Text => {
                let text = TextHandler::new(writer.clone(), opts);
                #[cfg(feature = "console")]
                let text = text.with_colors(self.use_colors);
                Arc::new(text)
            }
            OutputFormat::Json => Arc::new(JsonHandler::new(writer.clone(), opts)),
        };

        Logger {
            handler: Arc::new(PrintAwareHandler::new(structured, writer.clone())),
            level,
            writer,
            config,
            replace_attr: self.replace_attr,
            fatal_hook: self.fatal_hook.unwrap_or_else(exit_process),
            #[cfg(feature = "console")]
            use_colors: self.use_colors,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
