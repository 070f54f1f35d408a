//! Document → persistent conversion.
//!
//! Walks a document's entries in insertion order and builds a frozen
//! [`PersistentMap`] bottom-up through the map builder. Keys become interned
//! keywords when `keywordize` is on (the whole-document default) or stay
//! plain text when it is off; the flag propagates into nested documents.
//! Scalars cross unchanged; the input document is never mutated.
//!
//! Keywordizing parses qualified names: a key containing `/` becomes a
//! namespaced keyword (`"user/id"` → `:user/id`), whose bare name is what a
//! later import would emit — exporting and re-importing such a key is lossy
//! by the same last-write-wins rule the importer documents.

use crate::document::{Document, DocumentValue};
use crate::keyword::Keyword;
use crate::persistent::{MapKey, PersistentMap, PersistentValue};

/// Convert a document into a persistent mapping with keyword keys.
///
/// This is the whole-document default; [`export_with`] exposes the
/// plain-text-key form.
///
/// ```
/// use mapdoc_core::{export, Document, Keyword, MapKey};
///
/// let doc: Document = [("name", "Ann")].into_iter().collect();
/// let map = export(&doc);
/// assert!(map.contains_key(&MapKey::Keyword(Keyword::intern("name"))));
/// ```
pub fn export(doc: &Document) -> PersistentMap {
    export_with(doc, true)
}

/// Convert a document into a persistent mapping, choosing the key form.
pub fn export_with(doc: &Document, keywordize: bool) -> PersistentMap {
    export_entries(doc.iter(), keywordize)
}

/// Convert any ordered stream of document entries into a persistent mapping.
///
/// This is the generic seam for map-like collaborators that are not
/// [`Document`]s; `export_with` delegates here.
pub fn export_entries<'a, I>(entries: I, keywordize: bool) -> PersistentMap
where
    I: IntoIterator<Item = (&'a str, &'a DocumentValue)>,
{
    let mut builder = PersistentMap::builder();
    for (key, value) in entries {
        builder.insert(map_key(key, keywordize), export_value(value, keywordize));
    }
    builder.freeze()
}

/// Convert a document key: intern as a keyword or keep as text.
fn map_key(key: &str, keywordize: bool) -> MapKey {
    if keywordize {
        MapKey::Keyword(Keyword::intern(key))
    } else {
        MapKey::Text(key.to_string())
    }
}

/// Convert one document value, recursing into documents and arrays.
fn export_value(value: &DocumentValue, keywordize: bool) -> PersistentValue {
    match value {
        DocumentValue::Document(d) => PersistentValue::Map(export_with(d, keywordize)),
        DocumentValue::Array(items) => PersistentValue::Seq(
            items
                .iter()
                .map(|item| export_value(item, keywordize))
                .collect(),
        ),
        DocumentValue::Scalar(v) => PersistentValue::Scalar(v.clone()),
    }
}
