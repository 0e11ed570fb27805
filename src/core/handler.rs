//! Handler trait for record rendering and output
//!
//! A handler turns a [`Record`] into bytes on a destination. Handlers are
//! immutable once built: scoping one with extra attributes or a group
//! returns a new handler and leaves the original untouched.

use super::error::Result;
use super::level_var::LevelVar;
use super::log_context::{Attr, FieldValue};
use super::log_level::Level;
use super::record::Record;
use super::timestamp::TimestampFormat;
use std::fmt;
use std::sync::Arc;

/// Key of the built-in timestamp attribute
pub const TIME_KEY: &str = "time";
/// Key of the built-in level attribute
pub const LEVEL_KEY: &str = "level";
/// Key of the built-in message attribute
pub const MESSAGE_KEY: &str = "msg";

/// Attribute rewrite hook.
///
/// Called with the group path the attribute lives in (empty for the
/// built-in `time`/`level`/`msg` attributes). Returning `None` drops the
/// attribute from the output.
pub type ReplaceAttr = Arc<dyn Fn(&[String], Attr) -> Option<Attr> + Send + Sync>;

pub trait Handler: Send + Sync {
    /// Whether a record at `level` would be rendered at all
    fn enabled(&self, level: Level) -> bool;

    fn handle(&self, record: &Record) -> Result<()>;

    /// Handler that adds `attrs` to every record it renders
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;

    /// Handler that nests every following attribute under `name`
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;

    fn flush(&self) -> Result<()>;

    fn name(&self) -> &str;
}

/// Options shared by the structured handlers
#[derive(Clone, Default)]
pub struct HandlerOptions {
    /// Threshold cell consulted by [`Handler::enabled`]
    pub level: LevelVar,
    pub replace_attr: Option<ReplaceAttr>,
    pub timestamp_format: TimestampFormat,
}

impl HandlerOptions {
    pub fn new(level: LevelVar) -> Self {
        Self {
            level,
            replace_attr: None,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_replace_attr(mut self, replace_attr: ReplaceAttr) -> Self {
        self.replace_attr = Some(replace_attr);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Run the rewrite hook, if any
    pub fn replace(&self, groups: &[String], attr: Attr) -> Option<Attr> {
        match &self.replace_attr {
            Some(replace) => replace(groups, attr),
            None => Some(attr),
        }
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("level", &self.level)
            .field("replace_attr", &self.replace_attr.is_some())
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}

/// Rewrite hook resolving the built-in level attribute to its display label.
///
/// Custom labels (`FATAL`) replace the standard form and the print
/// sentinel loses the attribute entirely. Attributes that do not carry a
/// level value pass through unchanged.
pub fn resolve_level_label(_groups: &[String], attr: Attr) -> Option<Attr> {
    if attr.key != LEVEL_KEY {
        return Some(attr);
    }
    let Some(level) = attr.value.as_level() else {
        return Some(attr);
    };
    level
        .label()
        .map(|label| Attr::new(attr.key, FieldValue::String(label.into_owned())))
}

/// Chain [`resolve_level_label`] in front of an optional user hook
pub fn label_replacer(user: Option<ReplaceAttr>) -> ReplaceAttr {
    Arc::new(move |groups: &[String], attr: Attr| {
        let attr = resolve_level_label(groups, attr)?;
        match &user {
            Some(replace) => replace(groups, attr),
            None => Some(attr),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_attr(level: Level) -> Attr {
        Attr::new(LEVEL_KEY, level)
    }

    #[test]
    fn test_label_for_custom_level() {
        let attr = resolve_level_label(&[], level_attr(Level::FATAL)).unwrap();
        assert_eq!(attr.value, FieldValue::String("FATAL".to_string()));
    }

    #[test]
    fn test_label_falls_back_to_standard_form() {
        let attr = resolve_level_label(&[], level_attr(Level::WARN)).unwrap();
        assert_eq!(attr.value, FieldValue::String("WARN".to_string()));

        let attr = resolve_level_label(&[], level_attr(Level::new(9))).unwrap();
        assert_eq!(attr.value, FieldValue::String("ERROR+1".to_string()));
    }

    #[test]
    fn test_print_level_attribute_dropped() {
        assert!(resolve_level_label(&[], level_attr(Level::PRINT)).is_none());
    }

    #[test]
    fn test_other_attributes_untouched() {
        let attr = Attr::new("user", "alice");
        assert_eq!(resolve_level_label(&[], attr.clone()), Some(attr));

        // a user attribute that happens to be called "level"
        let attr = Attr::new(LEVEL_KEY, 3);
        assert_eq!(resolve_level_label(&[], attr.clone()), Some(attr));
    }

    #[test]
    fn test_label_replacer_chains_user_hook() {
        let user: ReplaceAttr = Arc::new(|_groups: &[String], attr: Attr| {
            if attr.key == TIME_KEY {
                None
            } else {
                Some(attr)
            }
        });
        let replace = label_replacer(Some(user));

        assert!(replace(&[], Attr::new(TIME_KEY, "now")).is_none());
        let attr = replace(&[], level_attr(Level::FATAL)).unwrap();
        assert_eq!(attr.value.to_string(), "FATAL");
    }

    #[test]
    fn test_options_without_hook_pass_through() {
        let opts = HandlerOptions::default();
        let attr = level_attr(Level::FATAL);
        assert_eq!(opts.replace(&[], attr.clone()), Some(attr));
        assert_eq!(opts.level.level(), Level::DEBUG);
    }
}
