//! End-to-end board flows: form submission, drag-and-drop, search and
//! subscription round-trips.

use super::helpers::{App, app};
use join_board::store::{CollectionName, DocumentStore, Fields};
use join_board::summary::BoardSummary;
use join_board::task::domain::{Category, FormRules, Priority, Subtask, TaskId, TaskStatus};
use join_board::task::services::{DropRequest, TaskForm};
use rstest::rstest;
use serde_json::json;

async fn submit(
    app: &App,
    status: TaskStatus,
    title: &str,
    priority: Priority,
) -> Result<TaskId, eyre::Report> {
    let before = app.board.cache().tasks().len();
    let mut form = TaskForm::create(status, FormRules::default());
    form.set_title(title);
    form.set_due_date("2031/01/31");
    form.set_category(Some(Category::UserStory));
    form.set_priority(priority);
    let id = app.board.submit_form(&mut form).await?;
    app.tasks_settle(|tasks| tasks.len() == before + 1).await?;
    Ok(id)
}

fn titles(app: &App, status: TaskStatus) -> Vec<String> {
    app.board
        .board()
        .column(status)
        .iter()
        .map(|task| task.title().to_owned())
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_and_drop_survives_the_snapshot_round_trip(
    mut app: App,
) -> Result<(), eyre::Report> {
    app.start()?;
    let first = submit(&app, TaskStatus::ToDo, "First", Priority::Low).await?;
    submit(&app, TaskStatus::ToDo, "Second", Priority::Low).await?;
    submit(&app, TaskStatus::Done, "Shipped", Priority::Low).await?;

    app.board
        .drop_task(&DropRequest {
            task_id: first.clone(),
            target: TaskStatus::Done,
            target_index: 1,
        })
        .await?;
    app.tasks_settle(|tasks| {
        tasks
            .iter()
            .any(|task| task.id() == &first && task.status() == TaskStatus::Done)
            && tasks.iter().all(|task| task.order() < 2)
    })
    .await?;

    eyre::ensure!(titles(&app, TaskStatus::ToDo) == vec!["Second"], "to-do column");
    eyre::ensure!(
        titles(&app, TaskStatus::Done) == vec!["Shipped", "First"],
        "done column"
    );
    eyre::ensure!(
        app.board.cache().board().is_densely_ordered(),
        "columns are densely ranked"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn external_writes_reach_the_board(mut app: App) -> Result<(), eyre::Report> {
    app.start()?;
    let fields: Fields = match json!({
        "status": "in-progress",
        "order": 0,
        "title": "Written elsewhere",
        "category": "technical-task",
        "dueDate": "2031-02-01",
    }) {
        serde_json::Value::Object(map) => map,
        _ => Fields::new(),
    };

    app.store.add(&CollectionName::tasks(), fields).await?;
    app.tasks_settle(|tasks| tasks.len() == 1).await?;

    eyre::ensure!(
        titles(&app, TaskStatus::InProgress) == vec!["Written elsewhere"],
        "task arrives through the subscription"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_documents_do_not_break_the_board(mut app: App) -> Result<(), eyre::Report> {
    app.start()?;
    let broken: Fields = match json!({"status": "someday", "title": "Broken"}) {
        serde_json::Value::Object(map) => map,
        _ => Fields::new(),
    };
    app.store.add(&CollectionName::tasks(), broken).await?;
    submit(&app, TaskStatus::ToDo, "Healthy", Priority::Medium).await?;

    eyre::ensure!(app.board.board().len() == 1, "only the valid task is shown");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_filters_the_board_but_not_the_summary(mut app: App) -> Result<(), eyre::Report> {
    app.start()?;
    submit(&app, TaskStatus::ToDo, "Release notes", Priority::High).await?;
    submit(&app, TaskStatus::InProgress, "Refactor login", Priority::High).await?;
    submit(&app, TaskStatus::Done, "Release party", Priority::High).await?;

    app.board.search("release");

    let visible = app.board.board();
    eyre::ensure!(visible.len() == 2, "two tasks mention release");
    let summary = BoardSummary::from_tasks(&app.board.cache().tasks());
    eyre::ensure!(summary.total() == 3, "summary counts every task");
    eyre::ensure!(summary.urgent == 2, "done tasks are not urgent");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_form_round_trip_keeps_subtask_state(mut app: App) -> Result<(), eyre::Report> {
    app.start()?;
    let mut form = TaskForm::create(TaskStatus::AwaitFeedback, FormRules::default());
    form.set_title("Checklist");
    form.set_due_date("2031-03-03");
    form.set_category(Some(Category::TechnicalTask));
    form.set_subtasks(vec![Subtask::new("Alpha"), Subtask::new("Beta")]);
    let id = app.board.submit_form(&mut form).await?;
    app.tasks_settle(|tasks| tasks.len() == 1).await?;

    app.board.toggle_subtask(&id, 0).await?;
    let cached = app
        .board
        .task(&id)
        .ok_or_else(|| eyre::eyre!("task cached"))?;
    let contacts = app.directory.contacts();
    let mut edit = TaskForm::edit(cached, &contacts, FormRules::default());
    edit.set_description("Now with a description");
    app.board.submit_form(&mut edit).await?;
    app.tasks_settle(|tasks| tasks.iter().all(|task| !task.description().is_empty()))
        .await?;

    let saved = app
        .board
        .task(&id)
        .ok_or_else(|| eyre::eyre!("task cached"))?;
    eyre::ensure!(
        saved.content().completed_subtasks() == 1,
        "subtask state survives the edit"
    );
    eyre::ensure!(saved.status() == TaskStatus::AwaitFeedback, "column kept");
    Ok(())
}
