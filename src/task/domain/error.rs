//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned by task domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The task is not on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The subtask index does not exist on the task.
    #[error("task {task_id} has {len} subtasks, index {index} is out of range")]
    SubtaskOutOfRange {
        /// Task holding the subtasks.
        task_id: TaskId,
        /// Requested index.
        index: usize,
        /// Number of subtasks.
        len: usize,
    },

    /// The due date is not a real calendar date.
    #[error("invalid due date '{0}', expected YYYY/MM/DD")]
    InvalidDueDate(String),
}

/// Error returned while parsing status, priority or category values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task {field}: {value}")]
pub struct ParseTaskFieldError {
    /// Name of the parsed field.
    pub field: &'static str,
    /// Rejected input.
    pub value: String,
}

/// Reasons a task or subtask title is rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TitleError {
    /// The title is empty after trimming.
    #[error("title is required")]
    Empty,

    /// The trimmed title is shorter or longer than allowed.
    #[error("title must be {min}-{max} characters, got {actual}")]
    Length {
        /// Minimum length in characters.
        min: usize,
        /// Maximum length in characters.
        max: usize,
        /// Actual trimmed length.
        actual: usize,
    },

    /// The title contains a character outside the allow-list.
    #[error("title contains unsupported character '{0}'")]
    InvalidCharacter(char),
}
