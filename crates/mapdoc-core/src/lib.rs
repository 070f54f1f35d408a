//! # mapdoc-core
//!
//! Bidirectional structural codec between two tree-shaped data models:
//! the host application's **persistent** nested structure (immutable maps,
//! sequences, and scalars, with interned keyword keys) and the database
//! driver's **document** representation (a mutable, insertion-ordered
//! associative record).
//!
//! Driver queries hand back documents; [`export`] is how application data
//! becomes a document's persistent twin and [`import`] is the reverse. Both
//! directions are total functions — every reachable shape has a conversion,
//! and anything atomic crosses the boundary untouched.
//!
//! ## Quick start
//!
//! ```rust
//! use mapdoc_core::{export, import, Keyword, PersistentMap};
//!
//! // Application data: {:name "Ann", :age 42}
//! let map = PersistentMap::builder()
//!     .with(Keyword::intern("name"), "Ann")
//!     .with(Keyword::intern("age"), 42i64)
//!     .freeze();
//!
//! // Persistent → document: keyword keys normalize to text.
//! let doc = import(&map);
//! assert_eq!(doc.get("name"), Some(&"Ann".into()));
//!
//! // Document → persistent: keys are interned back into keywords.
//! assert_eq!(export(&doc), map);
//! ```
//!
//! ## Modules
//!
//! - [`import`] — persistent mapping → mutable document
//! - [`export`] — document → persistent mapping (keywordized or plain keys)
//! - [`persistent`] — the immutable value model and its builder
//! - [`document`] — the ordered, mutable document model
//! - [`keyword`] — interned symbolic keys
//! - [`scalar`] — the opaque atomic value family shared by both sides
//! - [`json`] — extended-JSON boundary for documents
//! - [`error`] — error types for the JSON boundary

pub mod document;
pub mod error;
pub mod export;
pub mod import;
pub mod json;
pub mod keyword;
pub mod persistent;
pub mod scalar;

pub use document::{Document, DocumentValue};
pub use error::MapdocError;
pub use export::{export, export_entries, export_with};
pub use import::import;
pub use json::{document_from_json, document_to_json};
pub use keyword::Keyword;
pub use persistent::{MapBuilder, MapKey, PersistentMap, PersistentSeq, PersistentValue};
pub use scalar::{ObjectId, Scalar};
