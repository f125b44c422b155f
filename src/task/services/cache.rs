//! Local task cache fed by the task subscription.

use crate::store::Replica;
use crate::task::domain::{Board, SearchTerm, Task, TaskId};
use std::sync::{Arc, PoisonError, RwLock};

/// Latest known tasks plus the active search term.
///
/// Snapshots replace the contents wholesale. Optimistic patches made
/// between snapshots are overwritten by the next snapshot.
#[derive(Debug, Clone, Default)]
pub struct TaskCache {
    tasks: Replica<Task>,
    search: Arc<RwLock<SearchTerm>>,
}

impl TaskCache {
    /// Creates an empty cache that is still loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached tasks with a snapshot.
    pub fn replace(&self, tasks: Vec<Task>) {
        tracing::debug!(count = tasks.len(), "task snapshot applied");
        self.tasks.replace(tasks);
    }

    /// Returns every cached task in snapshot order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.items()
    }

    /// Finds a cached task.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<Task> {
        self.tasks
            .read(|tasks| tasks.iter().find(|task| task.id() == id).cloned())
    }

    /// Returns `true` until the first snapshot arrived.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.tasks.is_loading()
    }

    /// Returns the number of snapshots and patches applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.tasks.revision()
    }

    /// Waits until `predicate` holds for the cached tasks.
    pub async fn wait_for(&self, predicate: impl Fn(&[Task]) -> bool) {
        self.tasks.wait_for(predicate).await;
    }

    /// Sets the search term from raw input.
    pub fn set_search_term(&self, raw: &str) {
        *self.search.write().unwrap_or_else(PoisonError::into_inner) = SearchTerm::new(raw);
    }

    /// Returns the active search term.
    #[must_use]
    pub fn search_term(&self) -> SearchTerm {
        self.search
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the tasks matching the search term in snapshot order.
    #[must_use]
    pub fn filtered_tasks(&self) -> Vec<Task> {
        let term = self.search_term();
        self.tasks.read(|tasks| {
            tasks
                .iter()
                .filter(|task| term.matches(task))
                .cloned()
                .collect()
        })
    }

    /// Returns the unfiltered board.
    #[must_use]
    pub fn board(&self) -> Board {
        Board::from_tasks(self.tasks())
    }

    /// Returns the board as shown under the active search term.
    #[must_use]
    pub fn visible_board(&self) -> Board {
        Board::from_tasks(self.filtered_tasks())
    }

    /// Overwrites cached tasks with locally changed versions.
    ///
    /// Tasks missing from the cache are ignored. Returns `false` when any
    /// of them was missing.
    #[must_use]
    pub fn apply_local(&self, changed: &[Task]) -> bool {
        if changed.is_empty() {
            return true;
        }
        self.tasks.patch(|tasks| {
            let mut all_cached = true;
            for task in changed {
                let Some(cached) = tasks.iter_mut().find(|cached| cached.id() == task.id()) else {
                    all_cached = false;
                    continue;
                };
                cached.clone_from(task);
            }
            all_cached
        })
    }

    /// Drops a task from the cache.
    pub fn remove_local(&self, id: &TaskId) {
        self.tasks.patch(|tasks| tasks.retain(|task| task.id() != id));
    }
}
