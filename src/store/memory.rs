//! In-memory document store for tests and local runs.

use super::{
    CollectionName, Document, DocumentId, DocumentStore, Fields, Query, StoreError, StoreResult,
    Subscription,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::watch;

/// Thread-safe in-memory document store.
///
/// Every mutation publishes the full collection to its subscribers, which
/// then apply their own queries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<HashMap<CollectionName, CollectionState>>>,
}

#[derive(Debug)]
struct CollectionState {
    documents: Vec<Document>,
    publisher: watch::Sender<Arc<Vec<Document>>>,
}

impl Default for CollectionState {
    fn default() -> Self {
        let (publisher, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            documents: Vec::new(),
            publisher,
        }
    }
}

impl CollectionState {
    fn publish(&self) {
        self.publisher.send_replace(Arc::new(self.documents.clone()));
    }

    fn position(&self, id: &DocumentId) -> Option<usize> {
        self.documents.iter().position(|document| document.id() == id)
    }
}

fn lock_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::backend(std::io::Error::other(err.to_string()))
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document under a caller-chosen identifier, replacing any
    /// existing document with that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the store lock is poisoned.
    pub fn insert_with_id(
        &self,
        collection: &CollectionName,
        id: DocumentId,
        fields: Fields,
    ) -> StoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let entry = state.entry(collection.clone()).or_default();
        let document = Document::new(id, fields);
        let existing = entry
            .position(document.id())
            .and_then(|index| entry.documents.get_mut(index));
        if let Some(slot) = existing {
            *slot = document;
        } else {
            entry.documents.push(document);
        }
        entry.publish();
        Ok(())
    }

    /// Returns the number of documents in a collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the store lock is poisoned.
    pub fn len(&self, collection: &CollectionName) -> StoreResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .get(collection)
            .map_or(0, |entry| entry.documents.len()))
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn add(&self, collection: &CollectionName, fields: Fields) -> StoreResult<DocumentId> {
        let id = DocumentId::generate();
        self.insert_with_id(collection, id.clone(), fields)?;
        Ok(id)
    }

    async fn get(
        &self,
        collection: &CollectionName,
        id: &DocumentId,
    ) -> StoreResult<Option<Document>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(collection).and_then(|entry| {
            entry
                .documents
                .iter()
                .find(|document| document.id() == id)
                .cloned()
        }))
    }

    async fn update(
        &self,
        collection: &CollectionName,
        id: &DocumentId,
        fields: Fields,
    ) -> StoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let entry = state
            .get_mut(collection)
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        let document = entry
            .documents
            .iter_mut()
            .find(|document| document.id() == id)
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        document.merge(fields);
        entry.publish();
        Ok(())
    }

    async fn delete(&self, collection: &CollectionName, id: &DocumentId) -> StoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(entry) = state.get_mut(collection) {
            let before = entry.documents.len();
            entry.documents.retain(|document| document.id() != id);
            if entry.documents.len() != before {
                entry.publish();
            }
        }
        Ok(())
    }

    fn subscribe(&self, collection: &CollectionName, query: Query) -> StoreResult<Subscription> {
        let mut state = self.state.write().map_err(lock_error)?;
        let entry = state.entry(collection.clone()).or_default();
        Ok(Subscription::new(
            collection.clone(),
            entry.publisher.subscribe(),
            query,
        ))
    }
}
