//! Status column, priority and category of a task.

use super::ParseTaskFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kanban column a task belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work not started.
    #[default]
    ToDo,
    /// Work under way.
    InProgress,
    /// Waiting for feedback from someone else.
    AwaitFeedback,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// All columns in board order.
    pub const ALL: [Self; 4] = [Self::ToDo, Self::InProgress, Self::AwaitFeedback, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to-do",
            Self::InProgress => "in-progress",
            Self::AwaitFeedback => "await-feedback",
            Self::Done => "done",
        }
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ToDo => "To do",
            Self::InProgress => "In progress",
            Self::AwaitFeedback => "Await feedback",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to-do" => Ok(Self::ToDo),
            "in-progress" => Ok(Self::InProgress),
            "await-feedback" => Ok(Self::AwaitFeedback),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskFieldError {
                field: "status",
                value: value.to_owned(),
            }),
        }
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Regular work.
    #[default]
    Medium,
    /// Urgent.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskFieldError {
                field: "priority",
                value: value.to_owned(),
            }),
        }
    }
}

/// Kind of work a task describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// A user-facing story.
    UserStory,
    /// An internal technical task.
    TechnicalTask,
}

impl Category {
    /// All categories in dropdown order.
    pub const ALL: [Self; 2] = [Self::TechnicalTask, Self::UserStory];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserStory => "user-story",
            Self::TechnicalTask => "technical-task",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UserStory => "User Story",
            Self::TechnicalTask => "Technical Task",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "user-story" => Ok(Self::UserStory),
            "technical-task" => Ok(Self::TechnicalTask),
            _ => Err(ParseTaskFieldError {
                field: "category",
                value: value.to_owned(),
            }),
        }
    }
}
