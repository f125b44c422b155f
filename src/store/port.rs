//! Document store port shared by the task board and the contact list.

use super::{CollectionName, Document, DocumentId, Fields, Query, StoreResult, Subscription};
use async_trait::async_trait;

/// Contract of the hosted document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Adds a document with a store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError::Backend`] when the backend rejects the
    /// write.
    async fn add(&self, collection: &CollectionName, fields: Fields) -> StoreResult<DocumentId>;

    /// Fetches a single document.
    ///
    /// Returns `None` when the document does not exist.
    async fn get(
        &self,
        collection: &CollectionName,
        id: &DocumentId,
    ) -> StoreResult<Option<Document>>;

    /// Merges fields into an existing document.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError::NotFound`] when the document does not
    /// exist.
    async fn update(
        &self,
        collection: &CollectionName,
        id: &DocumentId,
        fields: Fields,
    ) -> StoreResult<()>;

    /// Deletes a document. Deleting a missing document succeeds.
    async fn delete(&self, collection: &CollectionName, id: &DocumentId) -> StoreResult<()>;

    /// Subscribes to query results over a collection.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError::Backend`] when the subscription cannot be
    /// established.
    fn subscribe(&self, collection: &CollectionName, query: Query) -> StoreResult<Subscription>;
}
