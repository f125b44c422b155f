//! Task form state, validation and submission.
//!
//! The form serves both "add task" and "edit task". Field errors surface
//! only after the field was touched; [`TaskForm::submit`] touches every
//! failing field and returns all errors at once.

use crate::contact::domain::{Contact, ContactId};
use crate::task::domain::{
    Category, DueDate, FormRules, Priority, Subtask, SubtaskRule, Task, TaskContent, TaskStatus,
    TitleError,
};
use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

/// Whether the form creates a task or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Creates a task in the given column.
    Create {
        /// Column the new task is created in.
        status: TaskStatus,
    },
    /// Edits an existing task.
    Edit {
        /// Task as it was when the form was populated.
        task: Box<Task>,
    },
}

/// Validated result of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSubmission {
    /// A new task to be appended to a column.
    Create {
        /// Target column.
        status: TaskStatus,
        /// Normalized content.
        content: TaskContent,
    },
    /// The edited task with identifier, column and rank preserved.
    Update(Task),
}

/// Validation failures reported by the task form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskFormError {
    /// The title is blank.
    #[error("This field is required")]
    TitleRequired,

    /// The title violates length or character rules.
    #[error("Use {min}-{max} chars + valid symbols")]
    TitleInvalid {
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
        /// Rule that failed.
        reason: TitleError,
    },

    /// No due date was entered.
    #[error("This field is required")]
    DueDateRequired,

    /// The due date is not a real calendar date.
    #[error("invalid due date: {0}")]
    DueDateInvalid(String),

    /// No category was selected.
    #[error("This field is required")]
    CategoryRequired,

    /// The number of subtasks is not permitted.
    #[error("{}", subtask_hint(.count, .rule))]
    SubtaskCount {
        /// Number of subtasks on the form.
        count: usize,
        /// Rule that rejected the count.
        rule: SubtaskRule,
    },

    /// Several fields failed.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn subtask_hint(count: &usize, rule: &SubtaskRule) -> String {
    match rule {
        SubtaskRule::AtLeastTwo => format!("add at least two subtasks, got {count}"),
        SubtaskRule::AnyButOne | SubtaskRule::Any => {
            "add a second subtask or remove this one".to_owned()
        }
    }
}

fn format_errors(errors: &[TaskFormError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TaskFormError {
    /// Collapses a list of errors; a single error is returned unwrapped.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        match <[Self; 1]>::try_from(errors) {
            Ok([error]) => error,
            Err(errors) => Self::Multiple(errors),
        }
    }

    /// Returns the individual errors, flattening [`TaskFormError::Multiple`].
    #[must_use]
    pub fn errors(&self) -> Vec<&Self> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(Self::errors).collect(),
            other => vec![other],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FormValues {
    title: String,
    description: String,
    due_date: String,
    priority: Priority,
    assignees: Vec<ContactId>,
    category: Option<Category>,
    subtasks: Vec<Subtask>,
}

impl FormValues {
    fn from_task(task: &Task, contacts: &[Contact]) -> Self {
        let content = task.content();
        Self {
            title: content.title.clone(),
            description: content.description.clone(),
            due_date: content
                .due_date
                .map(DueDate::to_input_string)
                .unwrap_or_default(),
            priority: content.priority,
            assignees: content
                .assignees
                .iter()
                .filter(|id| contacts.iter().any(|contact| contact.id() == *id))
                .cloned()
                .collect(),
            category: Some(content.category),
            subtasks: content.subtasks.clone(),
        }
    }
}

/// State of the add/edit task form.
#[derive(Debug, Clone)]
pub struct TaskForm {
    mode: FormMode,
    rules: FormRules,
    values: FormValues,
    baseline: FormValues,
    title_touched: bool,
    due_date_touched: bool,
    category_touched: bool,
}

impl TaskForm {
    /// Creates an empty form that adds a task to `status`.
    #[must_use]
    pub fn create(status: TaskStatus, rules: FormRules) -> Self {
        Self {
            mode: FormMode::Create { status },
            rules,
            values: FormValues::default(),
            baseline: FormValues::default(),
            title_touched: false,
            due_date_touched: false,
            category_touched: false,
        }
    }

    /// Creates a form populated from an existing task.
    ///
    /// Assignees missing from `contacts` are dropped.
    #[must_use]
    pub fn edit(task: Task, contacts: &[Contact], rules: FormRules) -> Self {
        let mut form = Self::create(task.status(), rules);
        form.load(task, contacts);
        form
    }

    /// Switches the form to edit `task` and repopulates every field.
    pub fn load(&mut self, task: Task, contacts: &[Contact]) {
        let values = FormValues::from_task(&task, contacts);
        self.baseline = values.clone();
        self.values = values;
        self.mode = FormMode::Edit {
            task: Box::new(task),
        };
        self.clear_touched();
    }

    /// Records a successful edit: `saved` becomes the edited task and the
    /// current values become the baseline for [`TaskForm::is_dirty`].
    pub fn rebaseline(&mut self, saved: Task) {
        self.baseline = self.values.clone();
        self.mode = FormMode::Edit {
            task: Box::new(saved),
        };
        self.clear_touched();
    }

    /// Restores the defaults and clears the touch flags, keeping the mode.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.baseline = FormValues::default();
        self.clear_touched();
    }

    const fn clear_touched(&mut self) {
        self.title_touched = false;
        self.due_date_touched = false;
        self.category_touched = false;
    }

    /// Returns the form mode.
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Returns `true` when editing an existing task.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Returns the rules the form validates against.
    #[must_use]
    pub const fn rules(&self) -> FormRules {
        self.rules
    }

    /// Heading shown above the form.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        if self.is_edit() { "Edit Task" } else { "Add Task" }
    }

    /// Label of the submit button.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.is_edit() { "Save" } else { "Create Task" }
    }

    /// Confirmation shown after a successful submission.
    #[must_use]
    pub const fn success_message(&self) -> &'static str {
        if self.is_edit() {
            "Task updated"
        } else {
            "Task created"
        }
    }

    /// Returns the raw title input.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.values.title
    }

    /// Sets the raw title input.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.values.title = title.into();
    }

    /// Marks the title as touched.
    pub const fn touch_title(&mut self) {
        self.title_touched = true;
    }

    /// Returns the raw description input.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.values.description
    }

    /// Sets the raw description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.values.description = description.into();
    }

    /// Returns the raw due date input.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.values.due_date
    }

    /// Sets the raw due date input.
    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.values.due_date = due_date.into();
    }

    /// Marks the due date as touched.
    pub const fn touch_due_date(&mut self) {
        self.due_date_touched = true;
    }

    /// Returns the selected priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.values.priority
    }

    /// Selects a priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.values.priority = priority;
    }

    /// Returns the selected assignees.
    #[must_use]
    pub fn assignees(&self) -> &[ContactId] {
        &self.values.assignees
    }

    /// Adds the contact to the assignees, or removes it when already present.
    pub fn toggle_assignee(&mut self, id: ContactId) {
        let before = self.values.assignees.len();
        self.values.assignees.retain(|known| *known != id);
        if self.values.assignees.len() == before {
            self.values.assignees.push(id);
        }
    }

    /// Returns the selected category.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.values.category
    }

    /// Selects a category.
    pub const fn set_category(&mut self, category: Option<Category>) {
        self.values.category = category;
    }

    /// Marks the category as touched.
    pub const fn touch_category(&mut self) {
        self.category_touched = true;
    }

    /// Returns the subtasks.
    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.values.subtasks
    }

    /// Replaces the subtasks, typically with the composer's list.
    pub fn set_subtasks(&mut self, subtasks: Vec<Subtask>) {
        self.values.subtasks = subtasks;
    }

    /// Title error to display, once the title was touched.
    #[must_use]
    pub fn title_error(&self) -> Option<TaskFormError> {
        if !self.title_touched {
            return None;
        }
        self.check_title().err()
    }

    /// Due date error to display, once the due date was touched.
    #[must_use]
    pub fn due_date_error(&self) -> Option<TaskFormError> {
        if !self.due_date_touched {
            return None;
        }
        self.check_due_date().err()
    }

    /// Category error to display, once the category was touched.
    #[must_use]
    pub fn category_error(&self) -> Option<TaskFormError> {
        if !self.category_touched {
            return None;
        }
        self.check_category().err()
    }

    /// Returns `true` when the subtask count hint should be shown.
    #[must_use]
    pub fn show_subtask_hint(&self) -> bool {
        !self.has_valid_subtasks()
    }

    /// Returns `true` when the subtask count satisfies the rule.
    #[must_use]
    pub fn has_valid_subtasks(&self) -> bool {
        self.rules.subtasks.permits(self.values.subtasks.len())
    }

    /// Returns `true` when the form would submit successfully.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns `true` when any field differs from the populated values.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.values != self.baseline
    }

    /// Earliest date the due date picker offers: today.
    #[must_use]
    pub fn min_due_date(clock: &impl Clock) -> NaiveDate {
        clock.local().date_naive()
    }

    /// Validates the form and builds the submission.
    ///
    /// Every failing field is marked touched so that its error shows.
    ///
    /// # Errors
    ///
    /// Returns every validation failure, combined with
    /// [`TaskFormError::multiple`].
    pub fn submit(&mut self) -> Result<TaskSubmission, TaskFormError> {
        if self.check_title().is_err() {
            self.title_touched = true;
        }
        if self.check_due_date().is_err() {
            self.due_date_touched = true;
        }
        if self.check_category().is_err() {
            self.category_touched = true;
        }
        self.validate()
    }

    /// Validates the form without touching any field.
    ///
    /// # Errors
    ///
    /// Returns every validation failure, combined with
    /// [`TaskFormError::multiple`].
    pub fn validate(&self) -> Result<TaskSubmission, TaskFormError> {
        let mut errors = Vec::new();
        let title = self.check_title().map_err(|err| errors.push(err)).ok();
        let due_date = self.check_due_date().map_err(|err| errors.push(err)).ok();
        let category = self.check_category().map_err(|err| errors.push(err)).ok();
        let count = self.values.subtasks.len();
        if !self.rules.subtasks.permits(count) {
            errors.push(TaskFormError::SubtaskCount {
                count,
                rule: self.rules.subtasks,
            });
        }

        let (Some(title), Some(due_date), Some(category), true) =
            (title, due_date, category, errors.is_empty())
        else {
            return Err(TaskFormError::multiple(errors));
        };

        let content = TaskContent {
            title,
            description: self.values.description.trim().to_owned(),
            due_date: Some(due_date),
            priority: self.values.priority,
            assignees: self.values.assignees.clone(),
            category,
            subtasks: self.values.subtasks.clone(),
        };
        Ok(match &self.mode {
            FormMode::Create { status } => TaskSubmission::Create {
                status: *status,
                content,
            },
            FormMode::Edit { task } => TaskSubmission::Update(task.with_content(content)),
        })
    }

    fn check_title(&self) -> Result<String, TaskFormError> {
        let rules = self.rules.title;
        rules.validate(&self.values.title).map_err(|reason| match reason {
            TitleError::Empty => TaskFormError::TitleRequired,
            other => TaskFormError::TitleInvalid {
                min: rules.min_len,
                max: rules.max_len,
                reason: other,
            },
        })
    }

    fn check_due_date(&self) -> Result<DueDate, TaskFormError> {
        let raw = self.values.due_date.trim();
        if raw.is_empty() {
            return Err(TaskFormError::DueDateRequired);
        }
        DueDate::parse(raw).map_err(|_| TaskFormError::DueDateInvalid(raw.to_owned()))
    }

    fn check_category(&self) -> Result<Category, TaskFormError> {
        self.values.category.ok_or(TaskFormError::CategoryRequired)
    }
}
