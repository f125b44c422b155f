//! Board service: task CRUD, drag-and-drop and form submission.

use super::{TaskCache, TaskForm, TaskFormError, TaskSubmission};
use crate::store::{CollectionName, DocumentStore, StoreError, SyncHandle, spawn_sync};
use crate::task::{
    adapters::document::{TaskCollection, decode_snapshot},
    domain::{Board, NewTask, Task, TaskContent, TaskDomainError, TaskId, TaskStatus},
};
use std::sync::Arc;
use thiserror::Error;

/// A write that failed while persisting a move.
#[derive(Debug)]
pub struct FailedWrite {
    /// Task whose write failed.
    pub task_id: TaskId,
    /// Store failure.
    pub error: StoreError,
}

/// Errors returned by board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A domain rule was violated.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The document store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The form did not validate.
    #[error(transparent)]
    Form(#[from] TaskFormError),

    /// Some writes of a move failed; the next snapshot repairs the cache.
    #[error("{} of {attempted} task writes failed", .failed.len())]
    Persist {
        /// Failed writes.
        failed: Vec<FailedWrite>,
        /// Number of writes attempted.
        attempted: usize,
    },
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// A task dropped onto a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRequest {
    /// Dragged task.
    pub task_id: TaskId,
    /// Column the task was dropped on.
    pub target: TaskStatus,
    /// Drop position among the tasks shown in the target column.
    pub target_index: usize,
}

/// Task board kept in sync with the `tasks` collection.
#[derive(Debug)]
pub struct BoardService<S: DocumentStore> {
    collection: TaskCollection<S>,
    cache: TaskCache,
}

impl<S: DocumentStore> Clone for BoardService<S> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<S: DocumentStore + 'static> BoardService<S> {
    /// Creates a board over the given collection.
    #[must_use]
    pub fn new(store: Arc<S>, collection: CollectionName) -> Self {
        Self {
            collection: TaskCollection::new(store, collection),
            cache: TaskCache::new(),
        }
    }

    /// Returns the local task cache.
    #[must_use]
    pub const fn cache(&self) -> &TaskCache {
        &self.cache
    }

    /// Starts mirroring the task collection into the cache.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the subscription fails.
    pub fn start_sync(&self) -> BoardResult<SyncHandle> {
        let subscription = self.collection.subscribe()?;
        let cache = self.cache.clone();
        Ok(spawn_sync(subscription, move |snapshot| {
            cache.replace(decode_snapshot(&snapshot));
        }))
    }

    /// Appends a new task to the end of `status`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the write fails.
    pub async fn create(&self, status: TaskStatus, content: TaskContent) -> BoardResult<TaskId> {
        let order = self.cache.board().next_order(status);
        let task = NewTask {
            status,
            order,
            content,
        };
        let id = self.collection.add(&task).await.inspect_err(|err| {
            tracing::error!(status = %status, error = %err, "failed to create task");
        })?;
        tracing::info!(task_id = %id, status = %status, order, "task created");
        Ok(id)
    }

    /// Persists a form submission and returns the task identifier.
    ///
    /// Updates keep the column and rank of the cached task, so an edit saved
    /// after a concurrent move does not move the task back.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when the edited task is no longer on
    /// the board and [`BoardError::Store`] when the write fails.
    pub async fn save(&self, submission: TaskSubmission) -> BoardResult<TaskId> {
        match submission {
            TaskSubmission::Create { status, content } => self.create(status, content).await,
            TaskSubmission::Update(task) => {
                let id = task.id().clone();
                let cached = self
                    .cache
                    .find(&id)
                    .ok_or_else(|| TaskDomainError::TaskNotFound(id.clone()))?;
                self.update(&cached.with_content(task.content().clone()))
                    .await?;
                Ok(id)
            }
        }
    }

    /// Validates the form and saves it.
    ///
    /// A created task resets the form; a saved edit becomes the form's new
    /// baseline.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Form`] when validation fails and
    /// [`BoardError::Store`] when the write fails.
    pub async fn submit_form(&self, form: &mut TaskForm) -> BoardResult<TaskId> {
        let submission = form.submit()?;
        let id = self.save(submission.clone()).await?;
        match submission {
            TaskSubmission::Create { .. } => form.reset(),
            TaskSubmission::Update(task) => {
                form.rebaseline(self.cache.find(&id).unwrap_or(task));
            }
        }
        Ok(id)
    }

    /// Rewrites a cached task, updating the cache first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when the task is not on the board and
    /// [`BoardError::Store`] when the write fails.
    pub async fn update(&self, task: &Task) -> BoardResult<()> {
        if !self.cache.apply_local(std::slice::from_ref(task)) {
            return Err(TaskDomainError::TaskNotFound(task.id().clone()).into());
        }
        self.collection.update(task).await.inspect_err(|err| {
            tracing::error!(task_id = %task.id(), error = %err, "failed to update task");
        })?;
        Ok(())
    }

    /// Deletes a task, removing it from the cache first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the delete fails.
    pub async fn delete(&self, id: &TaskId) -> BoardResult<()> {
        self.cache.remove_local(id);
        self.collection.delete(id).await.inspect_err(|err| {
            tracing::error!(task_id = %id, error = %err, "failed to delete task");
        })?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Moves a dropped task and persists every task whose column or rank
    /// changed.
    ///
    /// The drop index refers to the board as shown under the active search
    /// term and is translated to the full column first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] for unknown tasks and
    /// [`BoardError::Persist`] when some writes failed.
    pub async fn drop_task(&self, request: &DropRequest) -> BoardResult<Vec<Task>> {
        let mut board = self.cache.board();
        let index = board.resolve_drop_index(
            &self.cache.visible_board(),
            &request.task_id,
            request.target,
            request.target_index,
        );
        let changed = board.move_task(&request.task_id, request.target, index)?;
        tracing::debug!(
            task_id = %request.task_id,
            target = %request.target,
            index,
            changed = changed.len(),
            "task dropped"
        );
        self.persist(changed).await
    }

    /// Moves a task to the top of a column and persists the change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] for unknown tasks and
    /// [`BoardError::Persist`] when some writes failed.
    pub async fn move_to_top(&self, id: &TaskId, target: TaskStatus) -> BoardResult<Vec<Task>> {
        let mut board = self.cache.board();
        let changed = board.move_to_top(id, target)?;
        self.persist(changed).await
    }

    /// Flips a subtask and persists the task; returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] for unknown tasks or subtasks and
    /// [`BoardError::Store`] when the write fails.
    pub async fn toggle_subtask(&self, id: &TaskId, index: usize) -> BoardResult<bool> {
        let mut task = self
            .cache
            .find(id)
            .ok_or_else(|| TaskDomainError::TaskNotFound(id.clone()))?;
        let done = task.toggle_subtask(index)?;
        self.update(&task).await?;
        Ok(done)
    }

    /// Sets the board search term.
    pub fn search(&self, raw: &str) {
        self.cache.set_search_term(raw);
    }

    /// Returns the board as shown under the active search term.
    #[must_use]
    pub fn board(&self) -> Board {
        self.cache.visible_board()
    }

    /// Finds a cached task.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<Task> {
        self.cache.find(id)
    }

    async fn persist(&self, changed: Vec<Task>) -> BoardResult<Vec<Task>> {
        if !self.cache.apply_local(&changed) {
            tracing::debug!("moved task left the board before the move was applied");
        }

        let attempted = changed.len();
        let mut failed = Vec::new();
        for task in &changed {
            if let Err(error) = self.collection.update(task).await {
                tracing::error!(
                    task_id = %task.id(),
                    error = %error,
                    "failed to persist task move"
                );
                failed.push(FailedWrite {
                    task_id: task.id().clone(),
                    error,
                });
            }
        }

        if failed.is_empty() {
            Ok(changed)
        } else {
            Err(BoardError::Persist { failed, attempted })
        }
    }
}
