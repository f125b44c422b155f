//! Shared wiring for in-memory integration tests.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use join_board::{
    auth::{AuthService, InMemoryAuthProvider},
    contact::{domain::Contact, services::ContactDirectory},
    store::{CollectionName, InMemoryDocumentStore, SyncHandle},
    task::{domain::Task, services::BoardService},
};
use rstest::fixture;

/// Time allowed for a snapshot to reach a cache.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Board, contact directory and auth wired to one in-memory store.
pub struct App {
    pub store: Arc<InMemoryDocumentStore>,
    pub directory: ContactDirectory<InMemoryDocumentStore>,
    pub board: BoardService<InMemoryDocumentStore>,
    pub auth: AuthService<InMemoryAuthProvider, InMemoryDocumentStore>,
    syncs: Vec<SyncHandle>,
}

impl App {
    /// Creates the services without starting synchronization.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryDocumentStore::new());
        let directory = ContactDirectory::new(Arc::clone(&store), CollectionName::contacts(), 15);
        let board = BoardService::new(Arc::clone(&store), CollectionName::tasks());
        let auth = AuthService::new(Arc::new(InMemoryAuthProvider::new()), directory.clone());
        Self {
            store,
            directory,
            board,
            auth,
            syncs: Vec::new(),
        }
    }

    /// Starts mirroring both collections.
    ///
    /// # Errors
    ///
    /// Returns an error when a subscription cannot be established.
    pub fn start(&mut self) -> Result<(), eyre::Report> {
        self.syncs.push(self.directory.start_sync()?);
        self.syncs.push(self.board.start_sync()?);
        Ok(())
    }

    /// Waits until the task cache satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// Returns an error when the cache does not settle in time.
    pub async fn tasks_settle(
        &self,
        predicate: impl Fn(&[Task]) -> bool,
    ) -> Result<(), eyre::Report> {
        within(self.board.cache().wait_for(predicate)).await
    }

    /// Waits until the contact directory satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory does not settle in time.
    pub async fn contacts_settle(
        &self,
        predicate: impl Fn(&[Contact]) -> bool,
    ) -> Result<(), eyre::Report> {
        within(self.directory.wait_for(predicate)).await
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

async fn within(future: impl Future<Output = ()>) -> Result<(), eyre::Report> {
    tokio::time::timeout(SETTLE_TIMEOUT, future)
        .await
        .map_err(|_| eyre::eyre!("cache did not settle within {SETTLE_TIMEOUT:?}"))
}

/// Provides an app whose synchronization has not started yet.
#[fixture]
pub fn app() -> App {
    App::new()
}
