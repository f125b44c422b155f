//! Checklist items nested inside a task.

use serde::{Deserialize, Serialize};

/// Titled checklist item of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    /// Item title.
    pub title: String,
    /// Whether the item is checked off.
    #[serde(default)]
    pub done: bool,
}

impl Subtask {
    /// Creates an unchecked subtask.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }
}
