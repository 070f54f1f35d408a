//! Persistent → document conversion.
//!
//! Walks a persistent mapping and produces a fresh, mutable [`Document`]:
//! every key is normalized to text, every value is converted depth-first.
//! The walk never mutates its input — the output is an independent deep
//! copy, so later edits on either side cannot be observed through the other.
//!
//! Keyword handling mirrors the host runtime's reading conventions:
//! a keyword **key** contributes its bare name (namespace discarded), and a
//! keyword **value** flattens to its bare name as a plain string. The
//! conversion is total; scalars cross unchanged.
//!
//! When two keys normalize to the same text (two keywords with equal bare
//! names in different namespaces, or a keyword next to plain text of the
//! same name), document insertion applies last-write-wins over the map's
//! iteration order. That silent overwrite is the one place information can
//! be lost; it is intentional and pinned by tests.

use crate::document::{Document, DocumentValue};
use crate::persistent::{MapKey, PersistentMap, PersistentValue};
use crate::scalar::Scalar;

/// Convert a persistent mapping into a mutable document.
///
/// ```
/// use mapdoc_core::{import, Keyword, PersistentMap};
///
/// let map = PersistentMap::builder()
///     .with(Keyword::intern("name"), "Ann")
///     .with(Keyword::intern("age"), 42i64)
///     .freeze();
///
/// let doc = import(&map);
/// assert_eq!(doc.get("name"), Some(&"Ann".into()));
/// assert_eq!(doc.get("age"), Some(&42i64.into()));
/// ```
pub fn import(map: &PersistentMap) -> Document {
    let mut doc = Document::with_capacity(map.len());
    for (key, value) in map.iter() {
        doc.insert(document_key(key), import_value(value));
    }
    doc
}

/// Normalize a mapping key to document key text: a keyword contributes its
/// bare name, plain text passes through.
fn document_key(key: &MapKey) -> String {
    match key {
        MapKey::Keyword(k) => k.name().to_string(),
        MapKey::Text(s) => s.clone(),
    }
}

/// Convert one persistent value, recursing into maps and sequences.
fn import_value(value: &PersistentValue) -> DocumentValue {
    match value {
        PersistentValue::Keyword(k) => DocumentValue::Scalar(Scalar::String(k.name().to_string())),
        PersistentValue::Map(m) => DocumentValue::Document(import(m)),
        PersistentValue::Seq(s) => DocumentValue::Array(s.iter().map(import_value).collect()),
        PersistentValue::Scalar(v) => DocumentValue::Scalar(v.clone()),
    }
}
