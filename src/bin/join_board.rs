//! Demo of the board core against the in-memory adapters.
//!
//! Usage:
//!
//! ```text
//! join-board [--config <path>] [--log <filter>]
//! ```
//!
//! Signs up a demo user, seeds contacts and tasks, performs a drag-and-drop
//! move and logs the resulting board and summary. `--log` may also be given
//! as `JOIN_BOARD_LOG`; it overrides `[logging] filter` from the config file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use join_board::{
    auth::{AuthService, InMemoryAuthProvider},
    config::AppConfig,
    contact::{domain::ContactDetails, services::ContactDirectory},
    store::InMemoryDocumentStore,
    summary::{BoardSummary, Greeting},
    task::{
        domain::{Category, Priority, Subtask, TaskStatus},
        services::{BoardService, DropRequest, TaskForm},
    },
    telemetry,
};
use mockable::DefaultClock;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Kanban board core demo")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// `tracing` filter directive.
    #[arg(long, env = "JOIN_BOARD_LOG")]
    log: Option<String>,
}

const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    if !telemetry::init(cli.log.as_deref().unwrap_or(&config.logging.filter)) {
        tracing::warn!("tracing subscriber already installed");
    }

    let store = Arc::new(InMemoryDocumentStore::new());
    let directory = ContactDirectory::new(
        Arc::clone(&store),
        config.contact_collection()?,
        config.contacts.limit,
    );
    let board = BoardService::new(Arc::clone(&store), config.task_collection()?);
    let auth = AuthService::new(Arc::new(InMemoryAuthProvider::new()), directory.clone());
    let _contacts_sync = directory.start_sync()?;
    let _tasks_sync = board.start_sync()?;

    let session = auth
        .sign_up("demo user", "demo@join.example", "demo-password")
        .await?;
    tracing::info!(
        greeting = %Greeting::now(&DefaultClock),
        name = session.greeting_name(),
        "signed in"
    );

    for (name, email) in [
        ("anja schulz", "anja@join.example"),
        ("benedikt ziegler", "benedikt@join.example"),
    ] {
        directory
            .create(ContactDetails::new(name, email, "+49 1111 111 11 1")?)
            .await?;
    }
    tokio::time::timeout(SETTLE_TIMEOUT, directory.wait_for(|contacts| contacts.len() == 3))
        .await?;
    let contacts = directory.contacts();

    let rules = config.form_rules();
    let seeds = [
        ("Kochwelt page & recipe recommender", Category::UserStory, Priority::High),
        ("HTML base template creation", Category::TechnicalTask, Priority::Low),
        ("Daily Kochwelt recipe", Category::UserStory, Priority::Medium),
    ];
    for (index, (title, category, priority)) in seeds.into_iter().enumerate() {
        let mut form = TaskForm::create(TaskStatus::ToDo, rules);
        form.set_title(title);
        form.set_due_date("2030/05/10");
        form.set_category(Some(category));
        form.set_priority(priority);
        form.set_subtasks(vec![Subtask::new("Draft"), Subtask::new("Review")]);
        if let Some(contact) = contacts.get(index) {
            form.toggle_assignee(contact.id().clone());
        }
        board.submit_form(&mut form).await?;
        let expected = index + 1;
        tokio::time::timeout(
            SETTLE_TIMEOUT,
            board.cache().wait_for(|tasks| tasks.len() == expected),
        )
        .await?;
    }

    if let Some(first) = board.board().column(TaskStatus::ToDo).first() {
        board
            .drop_task(&DropRequest {
                task_id: first.id().clone(),
                target: TaskStatus::InProgress,
                target_index: 0,
            })
            .await?;
    }

    let current = board.board();
    for (status, column) in current.columns() {
        let titles: Vec<&str> = column.iter().map(|task| task.title()).collect();
        tracing::info!(column = status.title(), tasks = ?titles, "board column");
        for task in column {
            let assignees: Vec<String> = task
                .content()
                .assignees
                .iter()
                .map(|id| directory.assignee_badge(id).initials)
                .collect();
            tracing::debug!(task = task.title(), ?assignees, "assignees");
        }
    }

    let summary = BoardSummary::from_tasks(current.tasks());
    tracing::info!(
        total = summary.total(),
        to_do = summary.to_do,
        in_progress = summary.in_progress,
        urgent = summary.urgent,
        upcoming_deadline = ?summary.upcoming_deadline.map(|date| date.to_string()),
        "summary"
    );

    auth.log_out().await?;
    Ok(())
}
