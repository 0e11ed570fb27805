//! State shared by the structured handlers

use crate::core::{
    Attr, FieldValue, HandlerOptions, Record, SharedWriter, LEVEL_KEY, MESSAGE_KEY, TIME_KEY,
};

/// Attributes collected by `with_attrs`, each remembered together with
/// the group path that was open when it was added.
#[derive(Clone)]
pub(crate) struct HandlerState {
    pub opts: HandlerOptions,
    pub writer: SharedWriter,
    pub groups: Vec<String>,
    pub preset: Vec<(Vec<String>, Attr)>,
}

impl HandlerState {
    pub fn new(writer: SharedWriter, opts: HandlerOptions) -> Self {
        Self {
            opts,
            writer,
            groups: Vec::new(),
            preset: Vec::new(),
        }
    }

    pub fn with_attrs(&self, attrs: Vec<Attr>) -> Self {
        let mut state = self.clone();
        for attr in attrs {
            if let Some(attr) = self.opts.replace(&self.groups, attr) {
                state.preset.push((self.groups.clone(), attr));
            }
        }
        state
    }

    /// An empty name leaves the state as is
    pub fn with_group(&self, name: &str) -> Self {
        let mut state = self.clone();
        if !name.is_empty() {
            state.groups.push(name.to_string());
        }
        state
    }

    /// Built-in attributes in output order, after the rewrite hook
    pub fn builtins(&self, record: &Record) -> Vec<Attr> {
        [
            Attr::new(TIME_KEY, self.opts.timestamp_format.to_field_value(&record.time)),
            Attr::new(LEVEL_KEY, FieldValue::Level(record.level)),
            Attr::new(MESSAGE_KEY, record.message.as_str()),
        ]
        .into_iter()
        .filter_map(|attr| self.opts.replace(&[], attr))
        .collect()
    }

    /// Attributes attached to the record itself, after the rewrite hook
    pub fn record_attrs(&self, record: &Record) -> Vec<Attr> {
        record
            .attrs
            .iter()
            .cloned()
            .filter_map(|attr| self.opts.replace(&self.groups, attr))
            .collect()
    }
}
