//! Interned symbolic keys.
//!
//! A [`Keyword`] is the persistent data model's symbolic label: an optionally
//! namespace-qualified name, distinguished by type from plain text, used both
//! as a map key and as a plain value. Keywords are interned in a process-wide
//! table, so two keywords with the same qualified name share storage and
//! compare equal through a pointer-identity fast path.
//!
//! Qualified-name parsing follows the host runtime's reader rules:
//! the text splits on the **first** `/` into namespace and name, except that
//! a string with no `/` — or the string `"/"` itself — is a bare keyword.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// An interned, optionally namespace-qualified symbolic label.
///
/// Construction always goes through the intern table: [`Keyword::intern`] is
/// a pure function of the name string, so equal names yield equal keywords
/// across the whole process. Clones are cheap (two `Arc` bumps).
#[derive(Debug, Clone)]
pub struct Keyword {
    namespace: Option<Arc<str>>,
    name: Arc<str>,
}

/// Process-wide intern table, keyed by the full qualified text.
/// Append-only; lock poisoning is recovered since entries are never
/// half-written.
static INTERN_TABLE: OnceLock<Mutex<HashMap<String, Keyword>>> = OnceLock::new();

impl Keyword {
    /// Intern a keyword from its qualified text.
    ///
    /// `"name"` yields a bare keyword; `"ns/name"` splits on the first `/`
    /// into namespace and name. The string `"/"` is a bare keyword whose
    /// name is `/`.
    ///
    /// ```
    /// use mapdoc_core::Keyword;
    ///
    /// let k = Keyword::intern("user/id");
    /// assert_eq!(k.namespace(), Some("user"));
    /// assert_eq!(k.name(), "id");
    /// assert_eq!(k, Keyword::intern("user/id"));
    /// ```
    pub fn intern(qualified: &str) -> Keyword {
        let table = INTERN_TABLE.get_or_init(|| Mutex::new(HashMap::new()));
        let mut table = table.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(keyword) = table.get(qualified) {
            return keyword.clone();
        }
        let keyword = Keyword::parse(qualified);
        table.insert(qualified.to_string(), keyword.clone());
        keyword
    }

    /// Intern a keyword from separate namespace and name parts.
    pub fn namespaced(namespace: &str, name: &str) -> Keyword {
        Keyword::intern(&format!("{namespace}/{name}"))
    }

    /// Split qualified text into namespace and name.
    fn parse(qualified: &str) -> Keyword {
        match qualified.find('/') {
            Some(i) if qualified != "/" => Keyword {
                namespace: Some(Arc::from(&qualified[..i])),
                name: Arc::from(&qualified[i + 1..]),
            },
            _ => Keyword {
                namespace: None,
                name: Arc::from(qualified),
            },
        }
    }

    /// The bare name, without any namespace qualifier.
    ///
    /// This is the text a keyword key contributes to a document: converting
    /// `user/id` to a document key yields `id`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The namespace qualifier, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        let names_equal = Arc::ptr_eq(&self.name, &other.name) || self.name == other.name;
        names_equal
            && match (&self.namespace, &other.namespace) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a == b,
                _ => false,
            }
    }
}

impl Eq for Keyword {}

impl Hash for Keyword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.as_deref().hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Keyword {
    /// Reader syntax: `:name` or `:ns/name`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, ":{ns}/{}", self.name),
            None => write!(f, ":{}", self.name),
        }
    }
}
