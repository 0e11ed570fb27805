//! JSON handler for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL format).
//! Groups become nested objects, so the output stays compatible with log
//! aggregation tools like ELK or Loki.
//!
//! A top-level attribute or group named like a built-in key that is
//! present (`time`, `level`, `msg`) is written as `fields.<name>` so the
//! built-in value is never overwritten.

use super::common::HandlerState;
use crate::core::{Attr, Handler, HandlerOptions, Level, Record, Result, SharedWriter};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct JsonHandler {
    state: HandlerState,
}

impl JsonHandler {
    pub fn new(writer: SharedWriter, opts: HandlerOptions) -> Self {
        Self {
            state: HandlerState::new(writer, opts),
        }
    }

    /// Build the JSON object for `record`
    pub fn to_value(&self, record: &Record) -> Value {
        let mut object = Map::new();
        let mut reserved = Vec::new();

        for attr in self.state.builtins(record) {
            reserved.push(attr.key.clone());
            object.insert(attr.key, attr.value.to_json_value());
        }

        for (groups, attr) in &self.state.preset {
            insert_nested(&mut object, &reserved, groups, attr);
        }

        for attr in self.state.record_attrs(record) {
            insert_nested(&mut object, &reserved, &self.state.groups, &attr);
        }

        Value::Object(object)
    }
}

fn insert_nested(
    object: &mut Map<String, Value>,
    reserved: &[String],
    groups: &[String],
    attr: &Attr,
) {
    let mut path: Vec<String> = groups.to_vec();
    path.push(attr.key.clone());
    if reserved.contains(&path[0]) {
        path[0] = format!("fields.{}", path[0]);
    }
    let Some((key, groups)) = path.split_last() else {
        return;
    };

    let mut target = object;
    for group in groups {
        let entry = target
            .entry(group.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(map) = entry else {
            return;
        };
        target = map;
    }
    target.insert(key.clone(), attr.value.to_json_value());
}

impl Handler for JsonHandler {
    fn enabled(&self, level: Level) -> bool {
        self.state.opts.level.is_enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let mut line = serde_json::to_string(&self.to_value(record))?;
        line.push('\n');
        self.state.writer.write_all(line.as_bytes())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        Arc::new(Self {
            state: self.state.with_attrs(attrs),
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(Self {
            state: self.state.with_group(name),
        })
    }

    fn flush(&self) -> Result<()> {
        self.state.writer.flush()
    }

    fn name(&self) -> &str {
        "json"
    }
}
