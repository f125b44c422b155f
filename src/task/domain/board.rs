//! Column layout and the drag-and-drop ordering protocol.

use super::{Task, TaskDomainError, TaskId, TaskStatus};
use std::collections::HashMap;

/// Tasks grouped into their status columns, each sorted by `order`.
///
/// Ties and tasks without a stored rank keep their snapshot order, so a
/// board built from a snapshot is deterministic even before its first
/// reindex.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    to_do: Vec<Task>,
    in_progress: Vec<Task>,
    await_feedback: Vec<Task>,
    done: Vec<Task>,
}

/// Converts a column index into a stored rank.
fn rank(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

impl Board {
    /// Groups tasks into columns.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.column_mut(task.status()).push(task);
        }
        for status in TaskStatus::ALL {
            board.column_mut(status).sort_by_key(Task::order);
        }
        board
    }

    /// Returns the tasks of a column in display order.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::ToDo => &self.to_do,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::AwaitFeedback => &self.await_feedback,
            TaskStatus::Done => &self.done,
        }
    }

    const fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::ToDo => &mut self.to_do,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::AwaitFeedback => &mut self.await_feedback,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Iterates over all columns in board order.
    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }

    /// Iterates over all tasks, column by column.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns().flat_map(|(_, column)| column.iter())
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns().map(|(_, column)| column.len()).sum()
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks().find(|task| task.id() == id)
    }

    /// Returns the column and display index of a task.
    #[must_use]
    pub fn locate(&self, id: &TaskId) -> Option<(TaskStatus, usize)> {
        self.columns().find_map(|(status, column)| {
            column
                .iter()
                .position(|task| task.id() == id)
                .map(|index| (status, index))
        })
    }

    /// Rank a newly created task receives in a column: it goes last.
    #[must_use]
    pub fn next_order(&self, status: TaskStatus) -> u32 {
        rank(self.column(status).len())
    }

    /// Returns `true` when every column is ranked `0..len` in display order.
    #[must_use]
    pub fn is_densely_ordered(&self) -> bool {
        self.columns().all(|(status, column)| {
            column
                .iter()
                .enumerate()
                .all(|(index, task)| task.order() == rank(index) && task.status() == status)
        })
    }

    /// Moves a task to `target_index` in the `target` column.
    ///
    /// The index is clamped to the column length and refers to the column
    /// without the moved task, so moves within one column behave like
    /// "remove, then insert". Afterwards every task in the source and the
    /// destination column is ranked by its display index.
    ///
    /// Returns every task whose column or rank changed, which is the set of
    /// writes the move requires.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] when the task is not on the
    /// board.
    pub fn move_task(
        &mut self,
        id: &TaskId,
        target: TaskStatus,
        target_index: usize,
    ) -> Result<Vec<Task>, TaskDomainError> {
        let (source, index) = self
            .locate(id)
            .ok_or_else(|| TaskDomainError::TaskNotFound(id.clone()))?;

        let before: HashMap<TaskId, (TaskStatus, u32)> = self
            .column(source)
            .iter()
            .chain(self.column(target))
            .map(|task| (task.id().clone(), (task.status(), task.order())))
            .collect();

        let mut moved = self.column_mut(source).remove(index);
        moved.place(target, moved.order());
        let destination = self.column_mut(target);
        let insert_at = target_index.min(destination.len());
        destination.insert(insert_at, moved);

        self.reindex(source);
        if target != source {
            self.reindex(target);
        }

        let mut affected = vec![source];
        if target != source {
            affected.push(target);
        }
        let changed = affected
            .into_iter()
            .flat_map(|status| self.column(status).iter())
            .filter(|task| before.get(task.id()) != Some(&(task.status(), task.order())))
            .cloned()
            .collect();
        Ok(changed)
    }

    /// Moves a task to the top of a column, as the "move to" menu does.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] when the task is not on the
    /// board.
    pub fn move_to_top(
        &mut self,
        id: &TaskId,
        target: TaskStatus,
    ) -> Result<Vec<Task>, TaskDomainError> {
        self.move_task(id, target, 0)
    }

    /// Translates a drop index on a filtered view of this board into an
    /// index on the full column.
    ///
    /// The task lands right before the visible task currently shown at
    /// `visible_index`, or at the end of the column when dropped past the
    /// last visible task.
    #[must_use]
    pub fn resolve_drop_index(
        &self,
        visible: &Self,
        id: &TaskId,
        target: TaskStatus,
        visible_index: usize,
    ) -> usize {
        let full: Vec<&TaskId> = self
            .column(target)
            .iter()
            .map(Task::id)
            .filter(|candidate| *candidate != id)
            .collect();
        let anchor = visible
            .column(target)
            .iter()
            .map(Task::id)
            .filter(|candidate| *candidate != id)
            .nth(visible_index);

        anchor
            .and_then(|anchor_id| full.iter().position(|candidate| *candidate == anchor_id))
            .unwrap_or(full.len())
    }

    /// Consumes the board and returns its tasks, column by column.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        let mut tasks = self.to_do;
        tasks.extend(self.in_progress);
        tasks.extend(self.await_feedback);
        tasks.extend(self.done);
        tasks
    }

    fn reindex(&mut self, status: TaskStatus) {
        for (index, task) in self.column_mut(status).iter_mut().enumerate() {
            task.place(status, rank(index));
        }
    }
}
