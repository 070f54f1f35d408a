//! The mutable, ordered document model.
//!
//! [`Document`] is the driver's native record shape: an associative container
//! from text keys to [`DocumentValue`]s that iterates in insertion order.
//! Entries live in a `Vec<(String, DocumentValue)>`, which keeps insertion
//! order without an extra map dependency; documents at the driver boundary
//! are small enough that linear key lookup is the right trade.
//!
//! A document is exclusively owned while under construction and handed off
//! by move; equality is entry-by-entry in order, matching the driver's wire
//! representation.

use std::ops::Index;

use chrono::{DateTime, Utc};

use crate::scalar::{ObjectId, Scalar};

/// A mutable, insertion-ordered associative record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: Vec<(String, DocumentValue)>,
}

/// A value a document can hold: a nested document, an ordered array, or an
/// opaque scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentValue {
    Document(Document),
    Array(Vec<DocumentValue>),
    Scalar(Scalar),
}

impl DocumentValue {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DocumentValue::Document(_) => "document",
            DocumentValue::Array(_) => "array",
            DocumentValue::Scalar(s) => s.kind(),
        }
    }
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    pub fn with_capacity(capacity: usize) -> Document {
        Document {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert an entry. A key that is already present keeps its position and
    /// takes the new value; the displaced value is returned.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<DocumentValue>,
    ) -> Option<DocumentValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&DocumentValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut DocumentValue> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Remove an entry, shifting later entries up. Returns the removed value.
    pub fn remove(&mut self, key: &str) -> Option<DocumentValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &DocumentValue> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl Index<&str> for Document {
    type Output = DocumentValue;

    /// # Panics
    ///
    /// Panics if the key is not present. Use [`Document::get`] for a
    /// fallible lookup.
    fn index(&self, key: &str) -> &DocumentValue {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no entry found for key {key:?}"),
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, DocumentValue);
    type IntoIter = std::vec::IntoIter<(String, DocumentValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a DocumentValue);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, DocumentValue)>,
        fn(&'a (String, DocumentValue)) -> (&'a String, &'a DocumentValue),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Into<String>, V: Into<DocumentValue>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Document::new();
        doc.extend(iter);
        doc
    }
}

impl<K: Into<String>, V: Into<DocumentValue>> Extend<(K, V)> for Document {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl From<Document> for DocumentValue {
    fn from(d: Document) -> Self {
        DocumentValue::Document(d)
    }
}

impl From<Vec<DocumentValue>> for DocumentValue {
    fn from(items: Vec<DocumentValue>) -> Self {
        DocumentValue::Array(items)
    }
}

impl From<Scalar> for DocumentValue {
    fn from(s: Scalar) -> Self {
        DocumentValue::Scalar(s)
    }
}

impl From<bool> for DocumentValue {
    fn from(v: bool) -> Self {
        DocumentValue::Scalar(v.into())
    }
}

impl From<i32> for DocumentValue {
    fn from(v: i32) -> Self {
        DocumentValue::Scalar(v.into())
    }
}

impl From<i64> for DocumentValue {
    fn from(v: i64) -> Self {
        DocumentValue::Scalar(v.into())
    }
}

impl From<f64> for DocumentValue {
    fn from(v: f64) -> Self {
        DocumentValue::Scalar(v.into())
    }
}

impl From<&str> for DocumentValue {
    fn from(v: &str) -> Self {
        DocumentValue::Scalar(v.into())
    }
}

impl From<String> for DocumentValue {
    fn from(v: String) -> Self {
        DocumentValue::Scalar(v.into())
    }
}

impl From<ObjectId> for DocumentValue {
    fn from(v: ObjectId) -> Self {
        DocumentValue::Scalar(v.into())
    }
}

impl From<DateTime<Utc>> for DocumentValue {
    fn from(v: DateTime<Utc>) -> Self {
        DocumentValue::Scalar(v.into())
    }
}
