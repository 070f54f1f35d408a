//! Error types for the document JSON boundary.
//!
//! The codec proper ([`import`](crate::import) / [`export`](crate::export))
//! is total and raises nothing; only the extended-JSON surface can fail.

use thiserror::Error;

/// Errors that can occur while reading a document from extended JSON.
#[derive(Error, Debug)]
pub enum MapdocError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The top-level JSON value was not an object, so it cannot become a
    /// document.
    #[error("document root must be a JSON object, got {kind}")]
    RootNotObject { kind: &'static str },

    /// An extended-JSON singleton (`$oid`, `$date`, `$binary`) carried a
    /// malformed payload.
    #[error("malformed {key} value: {message}")]
    ExtendedJson {
        key: &'static str,
        message: String,
    },
}

/// Convenience alias used throughout mapdoc-core.
pub type Result<T> = std::result::Result<T, MapdocError>;
