//! Unit tests for the task board.

mod models_tests;
mod subtask_composer_tests;

use crate::task::domain::{Category, NewTask, Task, TaskContent, TaskId, TaskStatus};

/// Builds a task titled after its identifier.
fn task(id: &str, status: TaskStatus, order: u32) -> Task {
    titled(id, status, order, &format!("Task {id}"))
}

fn titled(id: &str, status: TaskStatus, order: u32, title: &str) -> Task {
    Task::new(
        TaskId::new(id).expect("valid task id"),
        NewTask {
            status,
            order,
            content: TaskContent::new(title, Category::TechnicalTask),
        },
    )
}

fn id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}
