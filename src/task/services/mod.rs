//! Application services for the task board.

mod board;
mod cache;
mod form;
mod subtask_composer;

pub use board::{BoardError, BoardResult, BoardService, DropRequest, FailedWrite};
pub use cache::TaskCache;
pub use form::{FormMode, TaskForm, TaskFormError, TaskSubmission};
pub use subtask_composer::{SubtaskComposer, SubtaskInputError};
