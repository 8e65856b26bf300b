//! Records loaded from the input source.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::state::filter::Filterable;

/// A single entity of the ordered collection: one JSON object.
///
/// Field order is preserved as parsed (`serde_json` map), so rendering a record
/// back to JSON round-trips the caller's layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap an already-parsed JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Convert an arbitrary JSON value, handing it back if it is not an object.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Single-line JSON rendering.
    pub fn to_compact_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

/// Text form of a scalar JSON value. Arrays, objects and null have none.
fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn collect_text(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|v| collect_text(v, out)),
        Value::Object(fields) => fields.values().for_each(|v| collect_text(v, out)),
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                out.push(text.into_owned());
            }
        }
    }
}

impl Filterable for Record {
    fn search_text(&self) -> Cow<'_, str> {
        let mut parts = Vec::new();
        self.0.values().for_each(|v| collect_text(v, &mut parts));
        Cow::Owned(parts.join("\n"))
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.0.get(name).and_then(scalar_text)
    }
}
