//! Subtask list editing for the task form.

use crate::task::domain::{Subtask, TitleError, TitleRules};
use thiserror::Error;

/// Reasons the composer input cannot be committed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubtaskInputError {
    /// The input is blank.
    #[error("subtask title is empty")]
    Empty,

    /// The input violates the title rules.
    #[error(transparent)]
    Invalid(TitleError),

    /// A subtask with the same title already exists.
    #[error("subtask '{0}' already exists")]
    Duplicate(String),
}

/// Adds, edits in place and removes subtasks.
#[derive(Debug, Clone, Default)]
pub struct SubtaskComposer {
    rules: TitleRules,
    subtasks: Vec<Subtask>,
    input: String,
    editing: Option<usize>,
}

impl SubtaskComposer {
    /// Creates a composer over an existing list.
    #[must_use]
    pub const fn new(subtasks: Vec<Subtask>, rules: TitleRules) -> Self {
        Self {
            rules,
            subtasks,
            input: String::new(),
            editing: None,
        }
    }

    /// Returns the current list.
    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Consumes the composer and returns the list.
    #[must_use]
    pub fn into_subtasks(self) -> Vec<Subtask> {
        self.subtasks
    }

    /// Returns the raw input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Sets the raw input.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Returns `true` when the input holds non-whitespace text.
    #[must_use]
    pub fn has_input(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Returns the rule violation of non-blank input, if any.
    #[must_use]
    pub fn input_error(&self) -> Option<TitleError> {
        if !self.has_input() {
            return None;
        }
        self.rules.validate(&self.input).err()
    }

    /// Index of the subtask being edited.
    #[must_use]
    pub const fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    /// Commits the input as a new subtask, or as the new title of the
    /// subtask being edited, and clears the input.
    ///
    /// # Errors
    ///
    /// Returns [`SubtaskInputError::Empty`] for blank input,
    /// [`SubtaskInputError::Invalid`] for rule violations and
    /// [`SubtaskInputError::Duplicate`] when adding a title that already
    /// exists, ignoring case. The input is kept on error.
    pub fn commit(&mut self) -> Result<(), SubtaskInputError> {
        let title = self.rules.validate(&self.input).map_err(|err| match err {
            TitleError::Empty => SubtaskInputError::Empty,
            other => SubtaskInputError::Invalid(other),
        })?;

        if let Some(index) = self.editing {
            if let Some(subtask) = self.subtasks.get_mut(index) {
                subtask.title = title;
            }
            self.clear();
            return Ok(());
        }

        let lowered = title.to_lowercase();
        if self
            .subtasks
            .iter()
            .any(|subtask| subtask.title.trim().to_lowercase() == lowered)
        {
            return Err(SubtaskInputError::Duplicate(title));
        }
        self.subtasks.push(Subtask::new(title));
        self.clear();
        Ok(())
    }

    /// Loads a subtask title into the input for editing.
    ///
    /// Returns `false` when the index does not exist.
    pub fn start_edit(&mut self, index: usize) -> bool {
        let Some(subtask) = self.subtasks.get(index) else {
            return false;
        };
        self.input.clone_from(&subtask.title);
        self.editing = Some(index);
        true
    }

    /// Clears the input and cancels editing.
    pub fn clear(&mut self) {
        self.input.clear();
        self.editing = None;
    }

    /// Removes a subtask, keeping the edited index in sync.
    ///
    /// Removing the edited subtask cancels editing; removing an earlier one
    /// shifts the edited index down.
    pub fn remove(&mut self, index: usize) -> Option<Subtask> {
        if index >= self.subtasks.len() {
            return None;
        }
        let removed = self.subtasks.remove(index);
        match self.editing {
            Some(editing) if editing == index => self.clear(),
            Some(editing) if editing > index => self.editing = Some(editing - 1),
            _ => {}
        }
        Some(removed)
    }
}
