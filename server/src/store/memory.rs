use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Document, DocumentCollection, DocumentId, StoreError};

/// A collection held in process memory. Each operation takes the lock once.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    documents: RwLock<BTreeMap<DocumentId, Document>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn insert_one(&self, document: Document) -> Result<DocumentId, StoreError> {
        let id = DocumentId::generate();
        self.documents.write().await.insert(id, document);
        Ok(id)
    }

    async fn find_one(&self, id: &DocumentId) -> Result<Option<Document>, StoreError> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn distinct_ids(&self) -> Result<Vec<DocumentId>, StoreError> {
        Ok(self.documents.read().await.keys().copied().collect())
    }

    async fn update_one(&self, id: &DocumentId, set: Document) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents.get_mut(id) else {
            return Ok(false);
        };
        document.extend(set);
        Ok(true)
    }

    async fn delete_one(&self, id: &DocumentId) -> Result<bool, StoreError> {
        Ok(self.documents.write().await.remove(id).is_some())
    }
}
