//! Task counts and the next urgent deadline.

use crate::task::domain::{DueDate, Priority, Task, TaskStatus};

/// Counts shown in the summary tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardSummary {
    /// Tasks in "to do".
    pub to_do: usize,
    /// Tasks in "in progress".
    pub in_progress: usize,
    /// Tasks in "await feedback".
    pub await_feedback: usize,
    /// Tasks in "done".
    pub done: usize,
    /// Unfinished high-priority tasks.
    pub urgent: usize,
    /// Earliest due date among the urgent tasks.
    pub upcoming_deadline: Option<DueDate>,
}

impl BoardSummary {
    /// Summarizes a set of tasks.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut summary, task| {
            match task.status() {
                TaskStatus::ToDo => summary.to_do += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::AwaitFeedback => summary.await_feedback += 1,
                TaskStatus::Done => summary.done += 1,
            }
            if task.content().priority == Priority::High && task.status() != TaskStatus::Done {
                summary.urgent += 1;
                summary.upcoming_deadline =
                    match (summary.upcoming_deadline, task.content().due_date) {
                        (Some(current), Some(candidate)) => Some(current.min(candidate)),
                        (current, candidate) => current.or(candidate),
                    };
            }
            summary
        })
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.to_do + self.in_progress + self.await_feedback + self.done
    }

    /// Returns the count for one column.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::ToDo => self.to_do,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::AwaitFeedback => self.await_feedback,
            TaskStatus::Done => self.done,
        }
    }
}
