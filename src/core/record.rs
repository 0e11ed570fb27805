//! Log record structure

use super::log_context::Attr;
use super::log_level::Level;
use chrono::{DateTime, Utc};

/// One in-flight log event
///
/// Records are built per call and dropped once the handler returns; the
/// message is kept verbatim so the raw print path can write it unchanged.
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub attrs: Vec<Attr>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}
