//! Document storage behind the resource handlers.
//!
//! # Design
//! Handlers never hold a global connection. They receive a [`Database`]
//! through router state, and each collection in it is a trait object over
//! [`DocumentCollection`]. Documents are schemaless JSON objects; the typed
//! records live in the handler modules and cross this boundary through
//! [`to_document`] and [`from_document`].
//!
//! Single-document operations are the only atomicity guarantee. There is no
//! read-modify-write transaction spanning a `find_one` and a later
//! `update_one`.

mod memory;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryCollection;

/// A stored document: a JSON object without its identifier.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Opaque, store-generated document identifier.
///
/// Identifiers are time-ordered, so sorting them yields creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse an identifier from its textual form.
    pub fn parse(raw: &str) -> Result<Self, InvalidId> {
        Uuid::try_parse(raw)
            .map(Self)
            .map_err(|_| InvalidId(raw.to_string()))
    }
}

impl FromStr for DocumentId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The textual form could not be turned into a [`DocumentId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed document identifier: {0:?}")]
pub struct InvalidId(pub String);

/// Failures reported by a storage collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or refused the operation.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// A stored document does not have the shape its collection expects.
    #[error("document {id} is corrupt")]
    Corrupt {
        id: DocumentId,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be encoded as a JSON object.
    #[error("record could not be encoded as a document")]
    Encode(#[source] serde_json::Error),
}

/// One named collection of documents.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Store a new document and return its generated identifier.
    async fn insert_one(&self, document: Document) -> Result<DocumentId, StoreError>;

    async fn find_one(&self, id: &DocumentId) -> Result<Option<Document>, StoreError>;

    /// Every identifier in the collection, ascending.
    async fn distinct_ids(&self) -> Result<Vec<DocumentId>, StoreError>;

    /// Overwrite the fields present in `set`, leaving the others untouched.
    ///
    /// Never inserts. Returns `false` when no document matched.
    async fn update_one(&self, id: &DocumentId, set: Document) -> Result<bool, StoreError>;

    /// Returns `false` when no document matched.
    async fn delete_one(&self, id: &DocumentId) -> Result<bool, StoreError>;
}

/// The collections the service works with.
#[derive(Clone)]
pub struct Database {
    pub todos: Arc<dyn DocumentCollection>,
    pub users: Arc<dyn DocumentCollection>,
}

impl Database {
    pub fn new(todos: Arc<dyn DocumentCollection>, users: Arc<dyn DocumentCollection>) -> Self {
        Self { todos, users }
    }

    /// A database whose collections live in process memory.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryCollection::new()),
            Arc::new(MemoryCollection::new()),
        )
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

/// Encode a record as a document.
pub fn to_document<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(record).map_err(StoreError::Encode)? {
        serde_json::Value::Object(document) => Ok(document),
        other => Err(StoreError::Encode(serde::ser::Error::custom(format!(
            "expected a JSON object, got {other}"
        )))),
    }
}

/// Decode the document stored under `id` into a record.
pub fn from_document<T: DeserializeOwned>(id: &DocumentId, document: Document) -> Result<T, StoreError> {
    serde_json::from_value(serde_json::Value::Object(document))
        .map_err(|source| StoreError::Corrupt { id: *id, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_accepts_display_form() {
        let id = DocumentId::generate();
        let parsed: DocumentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let err = DocumentId::parse("not-an-id").unwrap_err();
        assert_eq!(err, InvalidId("not-an-id".to_string()));
        assert!(DocumentId::parse("").is_err());
    }

    #[test]
    fn to_document_rejects_non_objects() {
        let err = to_document(&"just a string").unwrap_err();
        assert!(matches!(err, StoreError::Encode(_)));
    }

    #[test]
    fn from_document_reports_the_offending_id() {
        #[derive(Debug, Deserialize)]
        struct Needs {
            #[allow(dead_code)]
            title: String,
        }

        let id = DocumentId::generate();
        let document = to_document(&json!({"other": 1})).unwrap();
        let err = from_document::<Needs>(&id, document).unwrap_err();
        match err {
            StoreError::Corrupt { id: reported, .. } => assert_eq!(reported, id),
            other => panic!("unexpected error: {other}"),
        }
    }
}
