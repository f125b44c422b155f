//! Task entity and its editable content.

use super::{Category, DueDate, Priority, Subtask, TaskDomainError, TaskId, TaskStatus};
use crate::contact::domain::ContactId;

/// Editable content of a task, as produced by the task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContent {
    /// Trimmed title.
    pub title: String,
    /// Trimmed description, possibly empty.
    pub description: String,
    /// Due date; absent only on legacy documents.
    pub due_date: Option<DueDate>,
    /// Urgency.
    pub priority: Priority,
    /// Assigned contacts.
    pub assignees: Vec<ContactId>,
    /// Kind of work.
    pub category: Category,
    /// Checklist items.
    pub subtasks: Vec<Subtask>,
}

impl TaskContent {
    /// Creates content with the given title and category and defaults for
    /// everything else.
    #[must_use]
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority: Priority::default(),
            assignees: Vec::new(),
            category,
            subtasks: Vec::new(),
        }
    }

    /// Returns the number of checked-off subtasks.
    #[must_use]
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|subtask| subtask.done).count()
    }
}

/// Task payload before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Target column.
    pub status: TaskStatus,
    /// Rank inside the column.
    pub order: u32,
    /// Editable content.
    pub content: TaskContent,
}

/// Stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    status: TaskStatus,
    order: u32,
    content: TaskContent,
}

impl Task {
    /// Creates a task from its identifier and payload.
    #[must_use]
    pub fn new(id: TaskId, data: NewTask) -> Self {
        Self {
            id,
            status: data.status,
            order: data.order,
            content: data.content,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the column the task is in.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the rank inside the column.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Returns the editable content.
    #[must_use]
    pub const fn content(&self) -> &TaskContent {
        &self.content
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.content.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.content.description
    }

    /// Returns a copy with the content replaced, keeping identifier, column
    /// and rank.
    #[must_use]
    pub fn with_content(&self, content: TaskContent) -> Self {
        Self {
            id: self.id.clone(),
            status: self.status,
            order: self.order,
            content,
        }
    }

    /// Moves the task to a column and rank.
    pub(crate) const fn place(&mut self, status: TaskStatus, order: u32) {
        self.status = status;
        self.order = order;
    }

    /// Flips the checked state of a subtask and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SubtaskOutOfRange`] when the index does not
    /// exist.
    pub fn toggle_subtask(&mut self, index: usize) -> Result<bool, TaskDomainError> {
        let len = self.content.subtasks.len();
        let subtask = self.content.subtasks.get_mut(index).ok_or_else(|| {
            TaskDomainError::SubtaskOutOfRange {
                task_id: self.id.clone(),
                index,
                len,
            }
        })?;
        subtask.done = !subtask.done;
        Ok(subtask.done)
    }
}
