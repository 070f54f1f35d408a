//! Opaque atomic values shared by both data models.
//!
//! A [`Scalar`] is anything the codec refuses to interpret: it crosses the
//! conversion boundary unchanged in both directions. The variant set is the
//! value space the document driver and the host runtime already exchange;
//! coercion between members of this set is the driver's job, not the codec's.

use std::fmt;

use chrono::{DateTime, Utc};

/// An atomic value passed through unchanged by both conversion directions.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    /// Opaque byte blob.
    Binary(Vec<u8>),
    /// Driver-assigned record identifier.
    ObjectId(ObjectId),
    /// Driver datestamp.
    DateTime(DateTime<Utc>),
}

impl Scalar {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int32(_) => "int32",
            Scalar::Int64(_) => "int64",
            Scalar::Double(_) => "double",
            Scalar::String(_) => "string",
            Scalar::Binary(_) => "binary",
            Scalar::ObjectId(_) => "objectid",
            Scalar::DateTime(_) => "datetime",
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int32(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int64(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Double(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(v: Vec<u8>) -> Self {
        Scalar::Binary(v)
    }
}

impl From<ObjectId> for Scalar {
    fn from(v: ObjectId) -> Self {
        Scalar::ObjectId(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::DateTime(v)
    }
}

/// A 12-byte driver-assigned identifier, rendered as 24 hex characters.
///
/// The codec treats this as opaque; parsing and formatting exist for the
/// driver boundary and for the extended-JSON surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Wrap raw identifier bytes.
    pub const fn from_bytes(bytes: [u8; 12]) -> ObjectId {
        ObjectId(bytes)
    }

    /// The raw identifier bytes.
    pub const fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Parse a 24-character hex string. Returns `None` on wrong length or
    /// non-hex input.
    pub fn from_hex(s: &str) -> Option<ObjectId> {
        let decoded = hex::decode(s).ok()?;
        let bytes: [u8; 12] = decoded.try_into().ok()?;
        Some(ObjectId(bytes))
    }

    /// Lowercase 24-character hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
