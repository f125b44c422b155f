//! Domain model for board tasks.
//!
//! Everything here is pure: no store access, no clocks. The board ordering
//! protocol in [`Board`] and the form rules in [`FormRules`] are the parts
//! with real invariants.

mod board;
mod due_date;
mod error;
mod ids;
mod rules;
mod search;
mod status;
mod subtask;
mod task;

pub use board::Board;
pub use due_date::DueDate;
pub use error::{ParseTaskFieldError, TaskDomainError, TitleError};
pub use ids::TaskId;
pub use rules::{FormRules, SubtaskRule, TitleRules, is_allowed_title_char};
pub use search::SearchTerm;
pub use status::{Category, Priority, TaskStatus};
pub use subtask::Subtask;
pub use task::{NewTask, Task, TaskContent};
