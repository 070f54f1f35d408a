//! The persistent (immutable) data model.
//!
//! [`PersistentValue`] is a closed sum over the four shapes the host
//! application's nested data can take: keyword, mapping, sequence, scalar.
//! Mappings and sequences are frozen `Arc`-backed slices: cloning shares
//! storage, so a value may sit under any number of parents and nothing is
//! ever mutated after construction. A [`PersistentMap`] is built bottom-up
//! through [`MapBuilder`], which accumulates entries and freezes them into
//! the final map.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::keyword::Keyword;
use crate::scalar::{ObjectId, Scalar};

/// A node in the persistent nested data model.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistentValue {
    Keyword(Keyword),
    Map(PersistentMap),
    Seq(PersistentSeq),
    Scalar(Scalar),
}

impl PersistentValue {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PersistentValue::Keyword(_) => "keyword",
            PersistentValue::Map(_) => "map",
            PersistentValue::Seq(_) => "seq",
            PersistentValue::Scalar(s) => s.kind(),
        }
    }
}

/// A mapping key: an interned keyword or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapKey {
    Keyword(Keyword),
    Text(String),
}

impl From<Keyword> for MapKey {
    fn from(k: Keyword) -> Self {
        MapKey::Keyword(k)
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Text(s.to_string())
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        MapKey::Text(s)
    }
}

/// An immutable mapping with unique keys.
///
/// Iteration order is the builder's insertion order and is deterministic,
/// but equality is order-independent: two maps are equal when they hold the
/// same key/value pairs regardless of how they were assembled.
#[derive(Debug, Clone)]
pub struct PersistentMap {
    entries: Arc<[(MapKey, PersistentValue)]>,
}

impl PersistentMap {
    /// Start building a new mapping.
    pub fn builder() -> MapBuilder {
        MapBuilder::new()
    }

    /// An empty mapping.
    pub fn empty() -> PersistentMap {
        PersistentMap {
            entries: Vec::new().into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &MapKey) -> Option<&PersistentValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &MapKey) -> bool {
        self.get(key).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&MapKey, &PersistentValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &MapKey> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl PartialEq for PersistentMap {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.entries, &other.entries) {
            return true;
        }
        // Keys are unique, so equal length plus subset implies equality.
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl FromIterator<(MapKey, PersistentValue)> for PersistentMap {
    fn from_iter<I: IntoIterator<Item = (MapKey, PersistentValue)>>(iter: I) -> Self {
        let mut builder = MapBuilder::new();
        for (key, value) in iter {
            builder.insert(key, value);
        }
        builder.freeze()
    }
}

/// Accumulates mapping entries, then freezes them into a [`PersistentMap`].
///
/// Inserting a key that is already present replaces its value in place:
/// last write wins, position kept.
#[derive(Debug, Default)]
pub struct MapBuilder {
    entries: Vec<(MapKey, PersistentValue)>,
}

impl MapBuilder {
    pub fn new() -> MapBuilder {
        MapBuilder::default()
    }

    /// Insert an entry, replacing any existing value under the same key.
    pub fn insert(&mut self, key: impl Into<MapKey>, value: impl Into<PersistentValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Chainable form of [`insert`](MapBuilder::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<MapKey>, value: impl Into<PersistentValue>) -> MapBuilder {
        self.insert(key, value);
        self
    }

    /// Freeze the accumulated entries into an immutable mapping.
    pub fn freeze(self) -> PersistentMap {
        PersistentMap {
            entries: self.entries.into(),
        }
    }
}

/// An immutable ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistentSeq {
    items: Arc<[PersistentValue]>,
}

impl PersistentSeq {
    /// An empty sequence.
    pub fn empty() -> PersistentSeq {
        PersistentSeq {
            items: Vec::new().into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PersistentValue> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersistentValue> {
        self.items.iter()
    }
}

impl FromIterator<PersistentValue> for PersistentSeq {
    fn from_iter<I: IntoIterator<Item = PersistentValue>>(iter: I) -> Self {
        PersistentSeq {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<PersistentValue>> for PersistentSeq {
    fn from(items: Vec<PersistentValue>) -> Self {
        PersistentSeq {
            items: items.into(),
        }
    }
}

impl From<Keyword> for PersistentValue {
    fn from(k: Keyword) -> Self {
        PersistentValue::Keyword(k)
    }
}

impl From<PersistentMap> for PersistentValue {
    fn from(m: PersistentMap) -> Self {
        PersistentValue::Map(m)
    }
}

impl From<PersistentSeq> for PersistentValue {
    fn from(s: PersistentSeq) -> Self {
        PersistentValue::Seq(s)
    }
}

impl From<Scalar> for PersistentValue {
    fn from(s: Scalar) -> Self {
        PersistentValue::Scalar(s)
    }
}

impl From<bool> for PersistentValue {
    fn from(v: bool) -> Self {
        PersistentValue::Scalar(v.into())
    }
}

impl From<i32> for PersistentValue {
    fn from(v: i32) -> Self {
        PersistentValue::Scalar(v.into())
    }
}

impl From<i64> for PersistentValue {
    fn from(v: i64) -> Self {
        PersistentValue::Scalar(v.into())
    }
}

impl From<f64> for PersistentValue {
    fn from(v: f64) -> Self {
        PersistentValue::Scalar(v.into())
    }
}

impl From<&str> for PersistentValue {
    fn from(v: &str) -> Self {
        PersistentValue::Scalar(v.into())
    }
}

impl From<String> for PersistentValue {
    fn from(v: String) -> Self {
        PersistentValue::Scalar(v.into())
    }
}

impl From<ObjectId> for PersistentValue {
    fn from(v: ObjectId) -> Self {
        PersistentValue::Scalar(v.into())
    }
}

impl From<DateTime<Utc>> for PersistentValue {
    fn from(v: DateTime<Utc>) -> Self {
        PersistentValue::Scalar(v.into())
    }
}
