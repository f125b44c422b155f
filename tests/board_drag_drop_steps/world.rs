//! Shared world state for board drag-and-drop scenarios.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use join_board::{
    store::{CollectionName, InMemoryDocumentStore, SyncHandle},
    task::{
        domain::{Task, TaskId},
        services::BoardService,
    },
};
use rstest::fixture;

/// Board service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryDocumentStore>;

/// Scenario world for drag-and-drop behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub ids: HashMap<String, TaskId>,
    sync: Option<SyncHandle>,
}

impl BoardWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: BoardService::new(
                Arc::new(InMemoryDocumentStore::new()),
                CollectionName::tasks(),
            ),
            ids: HashMap::new(),
            sync: None,
        }
    }

    /// Starts mirroring the task collection once.
    pub fn ensure_synced(&mut self) -> Result<(), eyre::Report> {
        if self.sync.is_none() {
            self.sync = Some(self.service.start_sync()?);
        }
        Ok(())
    }

    /// Resolves a task title used in a scenario.
    pub fn id_of(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.ids
            .get(title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' in scenario world"))
    }

    /// Waits until the cache satisfies `predicate`.
    pub fn settle(&self, predicate: impl Fn(&[Task]) -> bool) -> Result<(), eyre::Report> {
        run_async(tokio::time::timeout(
            Duration::from_secs(2),
            self.service.cache().wait_for(predicate),
        ))
        .map_err(|_| eyre::eyre!("task cache did not settle"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
