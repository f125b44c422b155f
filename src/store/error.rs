//! Error types for document store operations.

use super::{CollectionName, DocumentId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by document store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The collection name is empty after trimming.
    #[error("collection name must not be empty")]
    EmptyCollectionName,

    /// The document identifier is empty after trimming.
    #[error("document identifier must not be empty")]
    EmptyDocumentId,

    /// The addressed document does not exist.
    #[error("document {id} not found in collection {collection}")]
    NotFound {
        /// Collection that was addressed.
        collection: CollectionName,
        /// Identifier that was not found.
        id: DocumentId,
    },

    /// The payload could not be represented as a document.
    #[error("invalid document payload: {0}")]
    InvalidPayload(String),

    /// Backend failure.
    #[error("document store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }

    /// Creates a not-found error for the given document address.
    #[must_use]
    pub fn not_found(collection: &CollectionName, id: &DocumentId) -> Self {
        Self::NotFound {
            collection: collection.clone(),
            id: id.clone(),
        }
    }
}
