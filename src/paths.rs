//! Dotted key paths
//!
//! This module provides the key path type and the navigation routines that
//! resolve a dotted path to a location inside a loaded property list, for
//! both reading and writing.
//!
//! A key path addresses nested values by dictionary key or array index,
//! with segments separated by `.`. Empty segments (a leading, trailing, or
//! doubled dot) are dropped, so `""` and `"."` both address the document
//! root. Traversal never creates intermediate nodes.

use crate::error::{Error, PathError, Result};
use plist::Value;

/// A parsed dotted key path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    /// The raw path expression
    raw: String,
    /// Parsed segments, empty segments dropped
    segments: Vec<String>,
}

impl KeyPath {
    /// Create a new key path from a dotted expression
    pub fn new(path: impl Into<String>) -> Self {
        let raw = path.into();
        let segments = split_path(&raw).into_iter().map(str::to_string).collect();
        Self { raw, segments }
    }

    /// Get the raw path expression
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the parsed segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Check if this path addresses the document root
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Split a dotted path expression into segments, dropping empty ones
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|s| !s.is_empty()).collect()
}

/// Short description of a value's kind, for diagnostics
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Dictionary(_) => "dictionary",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Real(_) => "real",
        Value::Boolean(_) => "boolean",
        Value::Data(_) => "data",
        Value::Date(_) => "date",
        Value::Uid(_) => "uid",
        _ => "unknown",
    }
}

/// Resolve a key path to a node inside `document`.
///
/// Dictionaries are indexed by key and arrays by integer-parsed segment.
/// Fails with [`Error::PathNotFound`] if any segment is absent, is not a
/// valid index, or lands on a value that cannot be indexed into.
pub fn resolve<'a>(document: &'a Value, path: &KeyPath) -> Result<&'a Value> {
    let mut node = document;
    for segment in path.segments() {
        node = step(node, segment)
            .map_err(|reason| path_error(path, segment, reason))?;
    }
    Ok(node)
}

/// Replace the node addressed by `path` with `new_node`.
///
/// A root path replaces the whole document through the mutable reference,
/// so the caller's binding observes the new value. Otherwise the parent
/// container is resolved and the final segment assigned directly: a
/// dictionary key is inserted, an array index must already exist.
pub fn replace(document: &mut Value, path: &KeyPath, new_node: Value) -> Result<()> {
    let Some((last, parents)) = path.segments().split_last() else {
        *document = new_node;
        return Ok(());
    };

    let mut node = document;
    for segment in parents {
        node = step_mut(node, segment)
            .map_err(|reason| path_error(path, segment, reason))?;
    }

    match node {
        Value::Dictionary(dict) => {
            dict.insert(last.clone(), new_node);
            Ok(())
        }
        Value::Array(items) => {
            let index = parse_index(last, items.len())
                .map_err(|reason| path_error(path, last, reason))?;
            items[index] = new_node;
            Ok(())
        }
        other => Err(path_error(
            path,
            last,
            format!("cannot index into {} value", kind_name(other)),
        )),
    }
}

/// Take one step into a node by segment name
fn step<'a>(node: &'a Value, segment: &str) -> std::result::Result<&'a Value, String> {
    match node {
        Value::Dictionary(dict) => dict
            .get(segment)
            .ok_or_else(|| format!("key '{}' is missing", segment)),
        Value::Array(items) => {
            let index = parse_index(segment, items.len())?;
            Ok(&items[index])
        }
        other => Err(format!("cannot index into {} value", kind_name(other))),
    }
}

/// Mutable variant of [`step`]
fn step_mut<'a>(node: &'a mut Value, segment: &str) -> std::result::Result<&'a mut Value, String> {
    match node {
        Value::Dictionary(dict) => dict
            .get_mut(segment)
            .ok_or_else(|| format!("key '{}' is missing", segment)),
        Value::Array(items) => {
            let index = parse_index(segment, items.len())?;
            Ok(&mut items[index])
        }
        other => Err(format!("cannot index into {} value", kind_name(other))),
    }
}

/// Parse a path segment as an array index and bounds-check it
fn parse_index(segment: &str, len: usize) -> std::result::Result<usize, String> {
    let index: usize = segment
        .parse()
        .map_err(|_| format!("'{}' is not an array index", segment))?;
    if index >= len {
        return Err(format!(
            "index {} is out of bounds for array of {} elements",
            index, len
        ));
    }
    Ok(index)
}

fn path_error(path: &KeyPath, segment: &str, reason: String) -> Error {
    Error::PathNotFound(
        PathError::new(path.raw())
            .with_segment(segment)
            .with_reason(reason),
    )
}
