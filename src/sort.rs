//! Property list sorting
//!
//! This module implements the sort engine and the top-level sorting
//! procedure. Dictionaries are reordered by case-folded key; arrays are
//! reordered by a case-folded comparison key extracted from each element
//! via a dotted path. Both sorts are stable and preserve the node's kind
//! and its exact set of keys or elements.

use crate::error::{Error, Result};
use crate::io::{load_value, Sink, Source};
use crate::paths::{kind_name, resolve, replace, KeyPath};
use plist::{Dictionary, Value};
use std::cmp::Ordering;
use std::time::SystemTime;

/// Comparison key extracted from a value.
///
/// Text folds to lower case before comparison; the remaining kinds keep
/// their natural ordering. Integers and reals are mutually comparable;
/// any other cross-kind pair is an error.
#[derive(Debug, Clone)]
enum SortKey {
    Text(String),
    Integer(i128),
    Real(f64),
    Boolean(bool),
    Date(SystemTime),
    Data(Vec<u8>),
}

impl SortKey {
    fn kind(&self) -> &'static str {
        match self {
            SortKey::Text(_) => "string",
            SortKey::Integer(_) => "integer",
            SortKey::Real(_) => "real",
            SortKey::Boolean(_) => "boolean",
            SortKey::Date(_) => "date",
            SortKey::Data(_) => "data",
        }
    }
}

/// Extract the comparison key for a value
fn sort_key(value: &Value) -> Result<SortKey> {
    match value {
        Value::String(s) => Ok(SortKey::Text(s.to_lowercase())),
        Value::Integer(i) => {
            let n = match i.as_signed() {
                Some(v) => i128::from(v),
                None => i.as_unsigned().map(i128::from).unwrap_or_default(),
            };
            Ok(SortKey::Integer(n))
        }
        Value::Real(r) => Ok(SortKey::Real(*r)),
        Value::Boolean(b) => Ok(SortKey::Boolean(*b)),
        Value::Date(d) => Ok(SortKey::Date(SystemTime::from(d.clone()))),
        Value::Data(bytes) => Ok(SortKey::Data(bytes.clone())),
        other => Err(Error::Incomparable {
            lhs: kind_name(other),
            rhs: kind_name(other),
        }),
    }
}

/// Compare two sort keys, failing when their kinds are not mutually ordered
fn compare(a: &SortKey, b: &SortKey) -> Result<Ordering> {
    use SortKey::*;

    match (a, b) {
        (Text(x), Text(y)) => Ok(x.cmp(y)),
        (Integer(x), Integer(y)) => Ok(x.cmp(y)),
        (Real(x), Real(y)) => x.partial_cmp(y).ok_or(incomparable(a, b)),
        (Integer(x), Real(y)) => (*x as f64).partial_cmp(y).ok_or(incomparable(a, b)),
        (Real(x), Integer(y)) => x.partial_cmp(&(*y as f64)).ok_or(incomparable(a, b)),
        (Boolean(x), Boolean(y)) => Ok(x.cmp(y)),
        (Date(x), Date(y)) => Ok(x.cmp(y)),
        (Data(x), Data(y)) => Ok(x.cmp(y)),
        _ => Err(incomparable(a, b)),
    }
}

fn incomparable(a: &SortKey, b: &SortKey) -> Error {
    Error::Incomparable {
        lhs: a.kind(),
        rhs: b.kind(),
    }
}

/// Produce a deterministically ordered copy of `node`.
///
/// A dictionary keeps the same key/value pairs, reordered by case-folded
/// key; `by` has no effect on dictionaries. An array is reordered by the
/// comparison key obtained from each element via `by`, where the empty
/// path compares the elements themselves. Both sorts are stable, so
/// elements with equal keys retain their input order.
pub fn sort_value(node: &Value, by: &KeyPath) -> Result<Value> {
    match node {
        Value::Dictionary(dict) => {
            let mut pairs: Vec<(String, Value)> = dict
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
            pairs.sort_by_key(|(k, _)| k.to_lowercase());

            let mut sorted = Dictionary::new();
            for (key, value) in pairs {
                sorted.insert(key, value);
            }
            Ok(Value::Dictionary(sorted))
        }
        Value::Array(items) => {
            let mut keyed = Vec::with_capacity(items.len());
            for item in items {
                let key = sort_key(resolve(item, by)?)?;
                keyed.push((key, item.clone()));
            }

            // sort_by cannot fail, so the comparator records the first
            // comparison error and reports equality until the sort ends
            let mut failure: Option<Error> = None;
            keyed.sort_by(|(a, _), (b, _)| match compare(a, b) {
                Ok(ordering) => ordering,
                Err(e) => {
                    failure.get_or_insert(e);
                    Ordering::Equal
                }
            });
            if let Some(e) = failure {
                return Err(e);
            }

            Ok(Value::Array(keyed.into_iter().map(|(_, v)| v).collect()))
        }
        other => Err(Error::Unsortable(kind_name(other))),
    }
}

/// Sort a property list or one of its nested containers.
///
/// Loads the document from `input` (encoding detected from content),
/// resolves `to_sort`, sorts that node with `sort_by` as the element key
/// path, writes the sorted copy back at the same location, and serializes
/// the document to `output` - XML when writing to standard output, binary
/// otherwise. The serializer keeps the explicit key order produced here.
/// Any failure aborts before output is written, so partial output is
/// never produced.
pub fn sort_plist(input: &Source, output: &Sink, to_sort: &str, sort_by: &str) -> Result<()> {
    let bytes = input.read_bytes()?;
    let mut document = load_value(&bytes)?;

    let target = KeyPath::new(to_sort);
    let by = KeyPath::new(sort_by);

    let sorted = sort_value(resolve(&document, &target)?, &by)?;
    replace(&mut document, &target, sorted)?;

    let mut buffer = Vec::new();
    if output.is_stdout() {
        document
            .to_writer_xml(&mut buffer)
            .map_err(|e| Error::Serialize(e.to_string()))?;
        if !buffer.ends_with(b"\n") {
            buffer.push(b'\n');
        }
    } else {
        document
            .to_writer_binary(&mut buffer)
            .map_err(|e| Error::Serialize(e.to_string()))?;
    }
    output.write_bytes(&buffer)
}
