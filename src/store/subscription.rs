//! Real-time snapshot delivery for collection subscriptions.

use super::{CollectionName, Document, Query, Snapshot};
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};

/// Live view of a collection filtered through a [`Query`].
///
/// The first call to [`Subscription::next`] yields the state at subscription
/// time; later calls wait for the next mutation of the collection. Dropping
/// the subscription unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    collection: CollectionName,
    receiver: watch::Receiver<Arc<Vec<Document>>>,
    query: Query,
}

impl Subscription {
    /// Creates a subscription over a collection watch channel.
    #[must_use]
    pub fn new(
        collection: CollectionName,
        mut receiver: watch::Receiver<Arc<Vec<Document>>>,
        query: Query,
    ) -> Self {
        receiver.mark_changed();
        Self {
            collection,
            receiver,
            query,
        }
    }

    /// Returns the subscribed collection.
    #[must_use]
    pub const fn collection(&self) -> &CollectionName {
        &self.collection
    }

    /// Evaluates the query against the latest collection state.
    #[must_use]
    pub fn current(&self) -> Snapshot {
        let documents = Arc::clone(&self.receiver.borrow());
        self.query.apply(&documents)
    }

    /// Waits for the next snapshot.
    ///
    /// Returns `None` once the store has shut down.
    pub async fn next(&mut self) -> Option<Snapshot> {
        self.receiver.changed().await.ok()?;
        let documents = Arc::clone(&self.receiver.borrow_and_update());
        Some(self.query.apply(&documents))
    }
}

/// Handle to a background task pumping snapshots into a callback.
///
/// Dropping the handle stops the task and thereby unsubscribes.
#[derive(Debug)]
pub struct SyncHandle {
    collection: CollectionName,
    task: JoinHandle<()>,
}

impl SyncHandle {
    /// Returns the synchronized collection.
    #[must_use]
    pub const fn collection(&self) -> &CollectionName {
        &self.collection
    }

    /// Returns `true` once the background task has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops synchronization.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns a task that feeds every snapshot of `subscription` to
/// `on_snapshot` until the store shuts down or the handle is dropped.
///
/// # Panics
///
/// Panics when called outside a Tokio runtime.
pub fn spawn_sync<F>(mut subscription: Subscription, mut on_snapshot: F) -> SyncHandle
where
    F: FnMut(Snapshot) + Send + 'static,
{
    let collection = subscription.collection().clone();
    let task = tokio::spawn(async move {
        while let Some(snapshot) = subscription.next().await {
            tracing::debug!(
                collection = %subscription.collection(),
                documents = snapshot.len(),
                "snapshot received"
            );
            on_snapshot(snapshot);
        }
        tracing::debug!(collection = %subscription.collection(), "subscription closed");
    });
    SyncHandle { collection, task }
}
