//! Output destination shared between a logger and its handlers
//!
//! Every write goes through one mutex, so concurrent callers never
//! interleave partial lines on the same destination.

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write `bytes` as one unit
    pub fn write_all(&self, bytes: &[u8]) -> Result<()> {
        let mut writer = self.inner.lock();
        writer
            .write_all(bytes)
            .map_err(|e| LoggerError::io_operation("writing log output", "destination rejected write", e))
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.lock().flush()?;
        Ok(())
    }

    /// `true` when both handles write to the same destination
    pub fn ptr_eq(&self, other: &SharedWriter) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SharedWriter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter").finish_non_exhaustive()
    }
}

/// In-memory destination whose contents stay readable after being handed
/// to a logger. Mostly useful for capturing output in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
