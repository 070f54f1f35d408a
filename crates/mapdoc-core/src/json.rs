//! Extended-JSON boundary for documents.
//!
//! Driver tooling renders documents as JSON, with the scalar types JSON
//! cannot express wrapped in singleton objects:
//!
//! - `ObjectId` → `{"$oid": "<24 hex chars>"}`
//! - `DateTime` → `{"$date": "<RFC 3339>"}`
//! - `Binary`   → `{"$binary": "<base64>"}`
//!
//! Reading folds those singletons back into their scalar forms; any other
//! JSON object becomes a nested document. JSON has a single number type, so
//! integral numbers come back as `Int64` regardless of the width they were
//! written with — the round-trip is shape-preserving, not width-preserving.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

use crate::document::{Document, DocumentValue};
use crate::error::{MapdocError, Result};
use crate::scalar::{ObjectId, Scalar};

impl Document {
    /// Parse an extended-JSON string into a document.
    ///
    /// The root must be a JSON object.
    ///
    /// ```
    /// use mapdoc_core::Document;
    ///
    /// let doc = Document::from_json_str(r#"{"name":"Ann","age":42}"#).unwrap();
    /// assert_eq!(doc.get("age"), Some(&42i64.into()));
    /// ```
    pub fn from_json_str(s: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(s)?;
        document_from_json(&value)
    }

    /// Render the document as a compact extended-JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&document_to_json(self))?)
    }
}

/// Render a document as an extended-JSON value. Entry order is preserved.
pub fn document_to_json(doc: &Document) -> Value {
    let mut map = Map::with_capacity(doc.len());
    for (key, value) in doc.iter() {
        map.insert(key.to_string(), value_to_json(value));
    }
    Value::Object(map)
}

fn value_to_json(value: &DocumentValue) -> Value {
    match value {
        DocumentValue::Document(d) => document_to_json(d),
        DocumentValue::Array(items) => Value::Array(items.iter().map(value_to_json).collect()),
        DocumentValue::Scalar(s) => scalar_to_json(s),
    }
}

fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Null => Value::Null,
        Scalar::Bool(b) => Value::Bool(*b),
        Scalar::Int32(n) => Value::Number(Number::from(*n)),
        Scalar::Int64(n) => Value::Number(Number::from(*n)),
        // NaN and infinities have no JSON form; they degrade to null.
        Scalar::Double(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        Scalar::String(s) => Value::String(s.clone()),
        Scalar::Binary(bytes) => singleton("$binary", Value::String(BASE64.encode(bytes))),
        Scalar::ObjectId(oid) => singleton("$oid", Value::String(oid.to_hex())),
        Scalar::DateTime(dt) => singleton(
            "$date",
            Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        ),
    }
}

fn singleton(key: &str, value: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), value);
    Value::Object(map)
}

/// Fold an extended-JSON value back into a document.
///
/// Fails if the root is not an object, or if an extended-JSON singleton
/// carries a malformed payload.
pub fn document_from_json(value: &Value) -> Result<Document> {
    match value {
        Value::Object(map) => object_to_document(map),
        other => Err(MapdocError::RootNotObject {
            kind: json_kind(other),
        }),
    }
}

fn object_to_document(map: &Map<String, Value>) -> Result<Document> {
    let mut doc = Document::with_capacity(map.len());
    for (key, value) in map {
        doc.insert(key.clone(), value_from_json(value)?);
    }
    Ok(doc)
}

fn value_from_json(value: &Value) -> Result<DocumentValue> {
    match value {
        Value::Null => Ok(DocumentValue::Scalar(Scalar::Null)),
        Value::Bool(b) => Ok(DocumentValue::Scalar(Scalar::Bool(*b))),
        Value::Number(n) => Ok(DocumentValue::Scalar(number_to_scalar(n))),
        Value::String(s) => Ok(DocumentValue::Scalar(Scalar::String(s.clone()))),
        Value::Array(items) => Ok(DocumentValue::Array(
            items.iter().map(value_from_json).collect::<Result<_>>()?,
        )),
        Value::Object(map) => {
            if let Some(scalar) = try_extended_scalar(map)? {
                return Ok(DocumentValue::Scalar(scalar));
            }
            Ok(DocumentValue::Document(object_to_document(map)?))
        }
    }
}

/// Integral JSON numbers become `Int64`; everything else becomes `Double`.
fn number_to_scalar(n: &Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int64(i)
    } else {
        Scalar::Double(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Recognize `{"$oid": …}`, `{"$date": …}`, and `{"$binary": …}` singletons.
///
/// Returns `Ok(None)` for plain objects; a singleton with a malformed
/// payload is an error rather than a silently nested document.
fn try_extended_scalar(map: &Map<String, Value>) -> Result<Option<Scalar>> {
    if map.len() != 1 {
        return Ok(None);
    }
    let (key, value) = match map.iter().next() {
        Some(entry) => entry,
        None => return Ok(None),
    };
    match (key.as_str(), value) {
        ("$oid", Value::String(s)) => match ObjectId::from_hex(s) {
            Some(oid) => Ok(Some(Scalar::ObjectId(oid))),
            None => Err(malformed("$oid", "expected 24 hex characters")),
        },
        ("$oid", _) => Err(malformed("$oid", "expected a string")),
        ("$date", Value::String(s)) => match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Ok(Some(Scalar::DateTime(dt.with_timezone(&Utc)))),
            Err(e) => Err(malformed("$date", &e.to_string())),
        },
        ("$date", _) => Err(malformed("$date", "expected an RFC 3339 string")),
        ("$binary", Value::String(s)) => match BASE64.decode(s) {
            Ok(bytes) => Ok(Some(Scalar::Binary(bytes))),
            Err(e) => Err(malformed("$binary", &e.to_string())),
        },
        ("$binary", _) => Err(malformed("$binary", "expected a base64 string")),
        _ => Ok(None),
    }
}

fn malformed(key: &'static str, message: &str) -> MapdocError {
    MapdocError::ExtendedJson {
        key,
        message: message.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
