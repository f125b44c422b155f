//! Wire representation of task documents.

use crate::contact::domain::ContactId;
use crate::store::{Document, Fields, StoreError, document::to_fields};
use crate::task::domain::{
    Category, DueDate, NewTask, Priority, Subtask, Task, TaskContent, TaskId, TaskStatus,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rank given to documents stored without an `order` field, placing them
/// after every ranked task until the next reindex.
const UNRANKED: u32 = u32::MAX;

/// Task document as stored in the `tasks` collection.
///
/// Every field is optional on the wire so that partially written documents
/// still decode; [`TaskDocument::into_task`] decides which gaps are fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDocument {
    /// Column wire name.
    pub status: Option<String>,
    /// Rank inside the column.
    pub order: Option<u32>,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Due date as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Priority wire name.
    pub priority: Option<String>,
    /// Assigned contact identifiers.
    pub assignees: Vec<String>,
    /// Category wire name.
    pub category: Option<String>,
    /// Checklist items.
    pub subtasks: Vec<Subtask>,
}

fn invalid(id: &TaskId, reason: impl std::fmt::Display) -> StoreError {
    StoreError::InvalidPayload(format!("task {id}: {reason}"))
}

impl TaskDocument {
    /// Decodes a stored document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] when a field has an
    /// incompatible type.
    pub fn from_fields(fields: &Fields) -> Result<Self, StoreError> {
        serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|err| StoreError::InvalidPayload(err.to_string()))
    }

    /// Encodes the document payload.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] when serialization fails.
    pub fn to_fields(&self) -> Result<Fields, StoreError> {
        to_fields(self)
    }

    /// Maps the document onto the domain task.
    ///
    /// Status and category are required; a missing priority defaults to
    /// medium, a missing rank sorts last and blank assignee identifiers are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] when status or category is
    /// missing or unknown, or when priority or due date cannot be parsed.
    pub fn into_task(self, id: TaskId) -> Result<Task, StoreError> {
        let status = self
            .status
            .as_deref()
            .ok_or_else(|| invalid(&id, "missing status"))
            .and_then(|value| TaskStatus::try_from(value).map_err(|err| invalid(&id, err)))?;
        let category = self
            .category
            .as_deref()
            .ok_or_else(|| invalid(&id, "missing category"))
            .and_then(|value| Category::try_from(value).map_err(|err| invalid(&id, err)))?;
        let priority = match self.priority.as_deref() {
            None | Some("") => Priority::default(),
            Some(value) => Priority::try_from(value).map_err(|err| invalid(&id, err))?,
        };
        let due_date = self
            .due_date
            .as_deref()
            .map(DueDate::parse)
            .transpose()
            .map_err(|err| invalid(&id, err))?;
        let assignees = self
            .assignees
            .into_iter()
            .filter_map(|assignee| ContactId::new(assignee).ok())
            .collect();

        Ok(Task::new(
            id,
            NewTask {
                status,
                order: self.order.unwrap_or(UNRANKED),
                content: TaskContent {
                    title: self.title,
                    description: self.description,
                    due_date,
                    priority,
                    assignees,
                    category,
                    subtasks: self.subtasks,
                },
            },
        ))
    }

    /// Decodes a snapshot document straight into a task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] when decoding fails.
    pub fn decode(document: &Document) -> Result<Task, StoreError> {
        let id = TaskId::from(document.id().clone());
        Self::from_fields(document.fields())?.into_task(id)
    }

    fn from_parts(status: TaskStatus, order: u32, content: &TaskContent) -> Self {
        Self {
            status: Some(status.as_str().to_owned()),
            order: Some(order),
            title: content.title.clone(),
            description: content.description.clone(),
            due_date: content.due_date.map(|date| date.to_string()),
            priority: Some(content.priority.as_str().to_owned()),
            assignees: content
                .assignees
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
            category: Some(content.category.as_str().to_owned()),
            subtasks: content.subtasks.clone(),
        }
    }
}

impl From<&NewTask> for TaskDocument {
    fn from(value: &NewTask) -> Self {
        Self::from_parts(value.status, value.order, &value.content)
    }
}

impl From<&Task> for TaskDocument {
    fn from(value: &Task) -> Self {
        Self::from_parts(value.status(), value.order(), value.content())
    }
}
