use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use models::{document::Document, errors::DomainError};
use tokio::sync::RwLock;

use super::DocumentRepository;

#[derive(Default)]
struct Inner {
    seq: u64,
    docs: HashMap<String, Document>,
}

/// In-memory document store.
///
/// The identifier counter and the map live behind one lock so that
/// increment-and-insert is a single critical section: every successful store
/// observes a distinct counter value. Lookups share a read lock.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for MemoryRepository {
    async fn store(&self, mut doc: Document) -> Result<Document, DomainError> {
        doc.validate()?;

        let mut inner = self.inner.write().await;
        inner.seq += 1;
        doc.id = inner.seq.to_string();
        inner.docs.insert(doc.id.clone(), doc.clone());
        Ok(doc)
    }

    async fn find_by_id(&self, id: &str) -> Result<Document, DomainError> {
        if id.is_empty() {
            return Err(DomainError::InvalidData);
        }

        let inner = self.inner.read().await;
        inner.docs.get(id).cloned().ok_or(DomainError::NotFound)
    }
}
