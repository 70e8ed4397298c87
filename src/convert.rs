//! Property list to JSON conversion
//!
//! This module maps a parsed property list onto the JSON object model.
//! Most kinds have a direct counterpart; the two that do not are rendered
//! as tagged objects:
//!
//! - a data blob whose bytes form a valid property list becomes
//!   `{"@type": "plist", "__plist": <decoded document>}`
//! - any other data blob becomes `{"@type": "bytes", "__bytes": "<base64>"}`
//!
//! Dates render as ISO-8601 text and unique-object references as their
//! integer payload.

use crate::error::{Error, Result};
use crate::io::{load_value, Sink, Source};
use crate::paths::kind_name;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use plist::Value;
use serde_json::{json, Map, Number, Value as JsonValue};
use std::io::Cursor;
use std::time::SystemTime;

/// Convert a property list value to a JSON value
pub fn to_json(value: &Value) -> Result<JsonValue> {
    match value {
        Value::Dictionary(dict) => {
            let mut object = Map::new();
            for (key, value) in dict {
                object.insert(key.to_string(), to_json(value)?);
            }
            Ok(JsonValue::Object(object))
        }
        Value::Array(items) => {
            let converted = items.iter().map(to_json).collect::<Result<Vec<_>>>()?;
            Ok(JsonValue::Array(converted))
        }
        Value::String(s) => Ok(JsonValue::String(s.clone())),
        Value::Boolean(b) => Ok(JsonValue::Bool(*b)),
        Value::Integer(i) => {
            let number = match i.as_signed() {
                Some(v) => Number::from(v),
                None => i.as_unsigned().map(Number::from).unwrap_or_else(|| 0.into()),
            };
            Ok(JsonValue::Number(number))
        }
        Value::Real(r) => Number::from_f64(*r).map(JsonValue::Number).ok_or_else(|| {
            Error::Serialize("non-finite real has no JSON representation".to_string())
        }),
        Value::Date(d) => {
            let timestamp = DateTime::<Utc>::from(SystemTime::from(d.clone()));
            Ok(JsonValue::String(timestamp.to_rfc3339()))
        }
        Value::Uid(uid) => Ok(JsonValue::Number(Number::from(uid.get()))),
        Value::Data(bytes) => Ok(data_to_json(bytes)),
        other => Err(Error::Serialize(format!(
            "{} value is not representable in JSON",
            kind_name(other)
        ))),
    }
}

/// Render a data blob, trying each decoding in order.
///
/// The bytes are first parsed as a nested property list; when that fails
/// they fall back to base64 text, which cannot fail.
fn data_to_json(bytes: &[u8]) -> JsonValue {
    if let Ok(nested) = Value::from_reader(Cursor::new(bytes)) {
        if let Ok(decoded) = to_json(&nested) {
            return json!({
                "@type": "plist",
                "__plist": decoded,
            });
        }
    }

    json!({
        "@type": "bytes",
        "__bytes": BASE64.encode(bytes),
    })
}

/// Convert a property list to indented JSON.
///
/// Loads the document from `input` (encoding detected from content) and
/// writes a 2-space indented JSON rendering with a trailing newline to
/// `output`. Any failure aborts before output is written.
pub fn plist_to_json(input: &Source, output: &Sink) -> Result<()> {
    let bytes = input.read_bytes()?;
    let document = load_value(&bytes)?;

    let mut text = serde_json::to_string_pretty(&to_json(&document)?)?;
    text.push('\n');
    output.write_bytes(text.as_bytes())
}
