//! Task collection adapter over a [`DocumentStore`].

use super::TaskDocument;
use crate::store::{CollectionName, DocumentStore, Query, Snapshot, StoreResult, Subscription};
use crate::task::domain::{NewTask, Task, TaskId};
use std::sync::Arc;

/// Maps tasks to and from documents of one collection.
#[derive(Debug)]
pub struct TaskCollection<S: DocumentStore> {
    store: Arc<S>,
    name: CollectionName,
}

impl<S: DocumentStore> Clone for TaskCollection<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            name: self.name.clone(),
        }
    }
}

impl<S: DocumentStore> TaskCollection<S> {
    /// Creates a collection adapter.
    #[must_use]
    pub const fn new(store: Arc<S>, name: CollectionName) -> Self {
        Self { store, name }
    }

    /// Returns the collection name.
    #[must_use]
    pub const fn name(&self) -> &CollectionName {
        &self.name
    }

    /// Stores a new task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns the store error when encoding or the write fails.
    pub async fn add(&self, task: &NewTask) -> StoreResult<TaskId> {
        let fields = TaskDocument::from(task).to_fields()?;
        let id = self.store.add(&self.name, fields).await?;
        Ok(TaskId::from(id))
    }

    /// Rewrites all fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns the store error when encoding or the write fails.
    pub async fn update(&self, task: &Task) -> StoreResult<()> {
        let fields = TaskDocument::from(task).to_fields()?;
        self.store
            .update(&self.name, &task.id().to_document_id(), fields)
            .await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns the store error when the delete fails.
    pub async fn delete(&self, id: &TaskId) -> StoreResult<()> {
        self.store.delete(&self.name, &id.to_document_id()).await
    }

    /// Subscribes to every task in the collection.
    ///
    /// # Errors
    ///
    /// Returns the store error when the subscription fails.
    pub fn subscribe(&self) -> StoreResult<Subscription> {
        self.store.subscribe(&self.name, Query::all())
    }
}

/// Decodes a snapshot into tasks, skipping undecodable documents.
#[must_use]
pub fn decode_snapshot(snapshot: &Snapshot) -> Vec<Task> {
    snapshot
        .documents()
        .iter()
        .filter_map(|document| match TaskDocument::decode(document) {
            Ok(task) => Some(task),
            Err(err) => {
                tracing::warn!(
                    document_id = %document.id(),
                    error = %err,
                    "skipping malformed task"
                );
                None
            }
        })
        .collect()
}
