//! Text handler: one `key=value` line per record
//!
//! Example: `time=2025-01-08T10:30:45.123Z level=INFO msg="Request processed" user=alice`
//!
//! Keys inside groups are qualified with the group path (`http.status=200`).
//! Keys and values that are empty or contain spaces, quotes, `=` or control
//! characters are quoted and escaped, so one record always stays on one line.

use super::common::HandlerState;
use crate::core::{Attr, FieldValue, Handler, HandlerOptions, Level, Record, Result, SharedWriter};
use std::sync::Arc;

#[derive(Clone)]
pub struct TextHandler {
    state: HandlerState,
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl TextHandler {
    pub fn new(writer: SharedWriter, opts: HandlerOptions) -> Self {
        Self {
            state: HandlerState::new(writer, opts),
            #[cfg(feature = "console")]
            use_colors: false,
        }
    }

    /// Color the level label with ANSI escapes
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn derive(&self, state: HandlerState) -> Self {
        Self {
            state,
            #[cfg(feature = "console")]
            use_colors: self.use_colors,
        }
    }

    /// Render `record` as a single line, newline included
    pub fn format(&self, record: &Record) -> String {
        let mut parts = Vec::new();

        for attr in self.state.builtins(record) {
            let value = self.format_builtin(&attr, record.level);
            parts.push(format!("{}={}", escape_value(&attr.key), value));
        }

        for (groups, attr) in &self.state.preset {
            parts.push(format_attr(groups, attr));
        }

        for attr in self.state.record_attrs(record) {
            parts.push(format_attr(&self.state.groups, &attr));
        }

        let mut line = parts.join(" ");
        line.push('\n');
        line
    }

    #[cfg_attr(not(feature = "console"), allow(unused_variables))]
    fn format_builtin(&self, attr: &Attr, level: Level) -> String {
        let value = format_value(&attr.value);

        #[cfg(feature = "console")]
        if self.use_colors && attr.key == crate::core::LEVEL_KEY {
            use colored::Colorize;
            return value.color(level.color_code()).to_string();
        }

        value
    }
}

impl Handler for TextHandler {
    fn enabled(&self, level: Level) -> bool {
        self.state.opts.level.is_enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let line = self.format(record);
        self.state.writer.write_all(line.as_bytes())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        Arc::new(self.derive(self.state.with_attrs(attrs)))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(self.derive(self.state.with_group(name)))
    }

    fn flush(&self) -> Result<()> {
        self.state.writer.flush()
    }

    fn name(&self) -> &str {
        "text"
    }
}

fn format_attr(groups: &[String], attr: &Attr) -> String {
    let key = if groups.is_empty() {
        escape_value(&attr.key)
    } else {
        let mut path = groups.join(".");
        path.push('.');
        path.push_str(&attr.key);
        escape_value(&path)
    };
    format!("{}={}", key, format_value(&attr.value))
}

fn format_value(value: &FieldValue) -> String {
    escape_value(&value.to_string())
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '"' || c == '=')
}

fn escape_value(value: &str) -> String {
    if needs_quoting(value) {
        quote_value(value)
    } else {
        value.to_string()
    }
}

fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{field, label_replacer, LevelVar, MemoryWriter, ReplaceAttr, TIME_KEY};

    fn drop_time() -> ReplaceAttr {
        Arc::new(|_groups: &[String], attr: Attr| {
            if attr.key == TIME_KEY {
                None
            } else {
                Some(attr)
            }
        })
    }

    fn handler(memory: &MemoryWriter) -> TextHandler {
        let opts = HandlerOptions::new(LevelVar::default())
            .with_replace_attr(label_replacer(Some(drop_time())));
        TextHandler::new(SharedWriter::new(memory.clone()), opts)
    }

    #[test]
    fn test_text_format() {
        let memory = MemoryWriter::new();
        let handler = handler(&memory);
        handler.handle(&Record::new(Level::INFO, "Test message")).unwrap();

        assert_eq!(memory.contents(), "level=INFO msg=\"Test message\"\n");
    }

    #[test]
    fn test_time_rendered_without_hook() {
        let memory = MemoryWriter::new();
        let handler = TextHandler::new(
            SharedWriter::new(memory.clone()),
            HandlerOptions::new(LevelVar::default()),
        );
        handler.handle(&Record::new(Level::FATAL, "boom")).unwrap();

        let out = memory.contents();
        assert!(out.starts_with("time="));
        // no label hook: the standard form is rendered
        assert!(out.contains("level=ERROR+4"));
        assert!(out.contains("msg=boom"));
    }

    #[test]
    fn test_text_format_with_attrs() {
        let memory = MemoryWriter::new();
        let handler = handler(&memory);
        let record = Record::new(Level::WARN, "slow")
            .with_attrs(vec![field("user_id", 123), field("action", "log in")]);
        handler.handle(&record).unwrap();

        assert_eq!(
            memory.contents(),
            "level=WARN msg=slow user_id=123 action=\"log in\"\n"
        );
    }

    #[test]
    fn test_groups_qualify_keys() {
        let memory = MemoryWriter::new();
        let handler = handler(&memory)
            .with_attrs(vec![field("service", "api")])
            .with_group("http")
            .with_attrs(vec![field("method", "GET")]);
        let record = Record::new(Level::INFO, "done").with_attrs(vec![field("status", 200)]);
        handler.handle(&record).unwrap();

        assert_eq!(
            memory.contents(),
            "level=INFO msg=done service=api http.method=GET http.status=200\n"
        );
    }

    #[test]
    fn test_newlines_stay_on_one_line() {
        let memory = MemoryWriter::new();
        let handler = handler(&memory);
        handler
            .handle(&Record::new(Level::ERROR, "line one\nERROR fake entry"))
            .unwrap();

        let out = memory.contents();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("msg=\"line one\\nERROR fake entry\""));
    }

    #[test]
    fn test_value_quoting() {
        assert_eq!(escape_value("plain"), "plain");
        assert_eq!(escape_value(""), "\"\"");
        assert_eq!(escape_value("a=b"), "\"a=b\"");
        assert_eq!(escape_value("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_awkward_keys_are_quoted() {
        let memory = MemoryWriter::new();
        let handler = handler(&memory);
        let record = Record::new(Level::INFO, "keys").with_attrs(vec![
            field("bad key!", 1),
            field("", 2),
            field("a=b", 3),
        ]);
        handler.handle(&record).unwrap();

        assert_eq!(
            memory.contents(),
            "level=INFO msg=keys \"bad key!\"=1 \"\"=2 \"a=b\"=3\n"
        );

        memory.clear();
        handler
            .with_group("my group")
            .handle(&Record::new(Level::INFO, "g").with_attrs(vec![field("k", 1)]))
            .unwrap();
        assert_eq!(memory.contents(), "level=INFO msg=g \"my group.k\"=1\n");
    }

    #[test]
    fn test_enabled_follows_level_var() {
        let var = LevelVar::default();
        let handler = TextHandler::new(
            SharedWriter::new(MemoryWriter::new()),
            HandlerOptions::new(var.clone()),
        );
        assert!(handler.enabled(Level::DEBUG));
        var.set(Level::ERROR);
        assert!(!handler.enabled(Level::WARN));
        assert!(handler.enabled(Level::FATAL));
    }
}
