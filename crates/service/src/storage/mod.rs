use async_trait::async_trait;
use models::{document::Document, errors::DomainError};

pub mod memory;

/// Storage contract for documents.
///
/// Alternate backends (e.g. a persistent store) can be substituted without
/// touching orchestration or the HTTP routes.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Assign the next identifier and persist the document. The returned
    /// document carries the assigned `id`.
    async fn store(&self, doc: Document) -> Result<Document, DomainError>;

    /// Fetch a document by its assigned identifier.
    async fn find_by_id(&self, id: &str) -> Result<Document, DomainError>;
}
