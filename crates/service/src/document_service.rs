use std::sync::Arc;

use models::{document::Document, errors::DomainError};
use serde_json::Value;
use tracing::warn;

use crate::{errors::ServiceError, storage::DocumentRepository};

/// Business rules between the HTTP boundary and storage.
#[derive(Clone)]
pub struct DocumentService {
    repo: Arc<dyn DocumentRepository>,
}

impl DocumentService {
    pub fn new(repo: Arc<dyn DocumentRepository>) -> Self {
        Self { repo }
    }

    /// Validate the payload and hand it to storage.
    ///
    /// Any failure inside the backend surfaces as a storage failure; domain
    /// validity is settled here before storage is involved.
    pub async fn submit(&self, value: Value) -> Result<Document, ServiceError> {
        if value.is_null() {
            return Err(DomainError::InvalidData.into());
        }

        let doc = Document::new(value);
        doc.validate()?;

        self.repo.store(doc).await.map_err(|e| {
            warn!(error = %e, "document store failed");
            ServiceError::Storage(e.to_string())
        })
    }

    /// Look up a document; `NotFound` and `InvalidData` pass through unchanged.
    pub async fn retrieve(&self, id: &str) -> Result<Document, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }
}
