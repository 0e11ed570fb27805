//! Structured logging attributes
//!
//! This module provides:
//! - `FieldValue`: the value half of an attribute
//! - `Attr`: one key/value pair attached to a record or a derived logger
//! - `LogContext`: an ordered attribute list with a fluent builder

use super::log_level::Level;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Carried by the built-in `level` attribute until the label is resolved
    Level(Level),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Level(l) => write!(f, "{}", l),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Level(l) => serde_json::Value::String(l.to_string()),
            FieldValue::Null => serde_json::Value::Null,
        }
    }

    pub fn as_level(&self) -> Option<Level> {
        match self {
            FieldValue::Level(l) => Some(*l),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Level> for FieldValue {
    fn from(l: Level) -> Self {
        FieldValue::Level(l)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A single structured key/value pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attr {
    pub key: String,
    pub value: FieldValue,
}

impl Attr {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Shorthand for [`Attr::new`]
///
/// ```
/// use eslog::{field, FieldValue};
///
/// let attr = field("number", 42);
/// assert_eq!(attr.key, "number");
/// assert_eq!(attr.value, FieldValue::Int(42));
/// ```
pub fn field<K, V>(key: K, value: V) -> Attr
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    Attr::new(key, value)
}

/// Ordered list of attributes for one record or one derived logger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogContext {
    attrs: Vec<Attr>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    /// Add a field to the context
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.attrs.push(Attr::new(key, value));
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.attrs.push(Attr::new(key, value));
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.attrs
            .iter()
            .map(Attr::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

/// Lets a context go straight into [`Logger::with_attrs`](crate::Logger::with_attrs)
/// or [`Logger::log_attrs`](crate::Logger::log_attrs)
impl IntoIterator for LogContext {
    type Item = Attr;
    type IntoIter = std::vec::IntoIter<Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.into_iter()
    }
}

impl FromIterator<Attr> for LogContext {
    fn from_iter<I: IntoIterator<Item = Attr>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_conversions() {
        assert_eq!(FieldValue::from("x"), FieldValue::String("x".to_string()));
        assert_eq!(FieldValue::from(42_i32), FieldValue::Int(42));
        assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Level::WARN).as_level(), Some(Level::WARN));
    }

    #[test]
    fn test_field_value_json() {
        assert_eq!(FieldValue::Int(7).to_json_value(), serde_json::json!(7));
        assert_eq!(
            FieldValue::Float(f64::NAN).to_json_value(),
            serde_json::Value::Null
        );
        assert_eq!(
            FieldValue::Level(Level::FATAL).to_json_value(),
            serde_json::json!("ERROR+4")
        );
    }

    #[test]
    fn test_context_keeps_insertion_order() {
        let context = LogContext::new()
            .with_field("b", 2)
            .with_field("a", 1)
            .with_field("c", "three");

        assert_eq!(context.len(), 3);
        assert_eq!(context.format_fields(), "b=2 a=1 c=three");
    }

    #[test]
    fn test_field_helper() {
        let attr = field("testkey", "testvalue");
        assert_eq!(attr.key, "testkey");
        assert_eq!(attr.value.to_string(), "testvalue");

        let attr = field("number", 42);
        assert_eq!(attr.value, FieldValue::Int(42));
    }

    #[test]
    fn test_collect_into_context() {
        let context: LogContext = vec![field("k", 1), field("v", false)].into_iter().collect();
        let attrs: Vec<Attr> = context.into_iter().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[1], field("v", false));
    }
}
