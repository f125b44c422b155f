//! Local replica of a subscribed collection.

use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::watch;

/// In-memory copy of the latest snapshot of a collection.
///
/// The replica is replaced wholesale whenever a snapshot arrives and may be
/// patched optimistically in between. Observers can wait for a state of
/// interest with [`Replica::wait_for`].
#[derive(Debug)]
pub struct Replica<T> {
    state: Arc<RwLock<ReplicaState<T>>>,
    revision: Arc<watch::Sender<u64>>,
}

#[derive(Debug)]
struct ReplicaState<T> {
    items: Vec<T>,
    loaded: bool,
}

impl<T> Clone for Replica<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            revision: Arc::clone(&self.revision),
        }
    }
}

impl<T> Default for Replica<T> {
    fn default() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(ReplicaState {
                items: Vec::new(),
                loaded: false,
            })),
            revision: Arc::new(revision),
        }
    }
}

impl<T: Clone> Replica<T> {
    /// Creates an empty replica that is still loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with a fresh snapshot and marks the replica
    /// loaded.
    pub fn replace(&self, items: Vec<T>) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.items = items;
            state.loaded = true;
        }
        self.bump();
    }

    /// Applies an in-place patch to the contents.
    pub fn patch<R>(&self, apply: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let result = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            apply(&mut state.items)
        };
        self.bump();
        result
    }

    /// Reads the contents without cloning them.
    pub fn read<R>(&self, inspect: impl FnOnce(&[T]) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        inspect(&state.items)
    }

    /// Returns a copy of the contents.
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.read(<[T]>::to_vec)
    }

    /// Returns `true` until the first snapshot has been applied.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .loaded
    }

    /// Returns the number of changes applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Waits until `predicate` holds for the contents.
    pub async fn wait_for(&self, predicate: impl Fn(&[T]) -> bool) {
        let mut changes = self.revision.subscribe();
        loop {
            if self.read(&predicate) {
                return;
            }
            if changes.changed().await.is_err() {
                return;
            }
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}
