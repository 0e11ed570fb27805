//! Level-aware output router
//!
//! [`PrintAwareHandler`] wraps a structured handler and decides per record
//! how it is written:
//!
//! - records below the threshold produce no output at all;
//! - records at [`Level::PRINT`] bypass the threshold and the structured
//!   layout, and their message bytes are written to the destination as is,
//!   with no label, timestamp, attributes or trailing newline;
//! - every other record goes to the wrapped handler.
//!
//! The wrapped handler must be built with the same [`LevelVar`](crate::LevelVar)
//! as the logger so both agree on what is enabled.

use crate::core::{Attr, Handler, Level, Record, Result, SharedWriter};
use std::sync::Arc;

#[derive(Clone)]
pub struct PrintAwareHandler {
    inner: Arc<dyn Handler>,
    writer: SharedWriter,
}

impl PrintAwareHandler {
    pub fn new(inner: Arc<dyn Handler>, writer: SharedWriter) -> Self {
        Self { inner, writer }
    }

    pub fn inner(&self) -> &Arc<dyn Handler> {
        &self.inner
    }

    pub fn writer(&self) -> &SharedWriter {
        &self.writer
    }
}

impl Handler for PrintAwareHandler {
    fn enabled(&self, level: Level) -> bool {
        level.is_print() || self.inner.enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        if record.level.is_print() {
            return self.writer.write_all(record.message.as_bytes());
        }
        if !self.inner.enabled(record.level) {
            return Ok(());
        }
        self.inner.handle(record)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        Arc::new(Self {
            inner: self.inner.with_attrs(attrs),
            writer: self.writer.clone(),
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(Self {
            inner: self.inner.with_group(name),
            writer: self.writer.clone(),
        })
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()?;
        self.writer.flush()
    }

    fn name(&self) -> &str {
        "print-aware"
    }
}
