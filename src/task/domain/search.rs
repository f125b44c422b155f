//! Free-text search over board tasks.

use super::Task;
use std::fmt;

/// Normalized board search term.
///
/// An empty term matches every task; otherwise a task matches when its title
/// or description contains the term, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalizes raw search input by trimming and lower-casing it.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Returns `true` when the term filters nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the normalized term.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the task matches the term.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.is_empty()
            || task.title().to_lowercase().contains(&self.0)
            || task.description().to_lowercase().contains(&self.0)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
