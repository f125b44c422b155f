//! Contact directory flows against the in-memory store.

use super::helpers::{App, app};
use join_board::contact::domain::ContactDetails;
use join_board::contact::services::DirectoryError;
use join_board::task::domain::{Category, TaskContent, TaskStatus};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_lists_contacts_by_name(mut app: App) -> Result<(), eyre::Report> {
    app.start()?;
    for (name, email) in [
        ("zoe zimmer", "zoe@example.com"),
        ("anna alder", "anna@example.com"),
        ("mia moser", "mia@example.com"),
    ] {
        app.directory
            .create(ContactDetails::new(name, email, "")?)
            .await?;
    }
    app.contacts_settle(|contacts| contacts.len() == 3).await?;

    let names: Vec<String> = app
        .directory
        .contacts()
        .iter()
        .map(|contact| contact.name().to_owned())
        .collect();
    eyre::ensure!(
        names == vec!["Anna Alder", "Mia Moser", "Zoe Zimmer"],
        "unexpected order: {names:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_in_user_cannot_delete_their_own_contact(mut app: App) -> Result<(), eyre::Report> {
    app.start()?;
    app.auth
        .sign_up("sofia müller", "sofia@example.com", "secret1")
        .await?;
    app.contacts_settle(|contacts| contacts.len() == 1).await?;
    let own = app
        .directory
        .contacts()
        .into_iter()
        .next()
        .ok_or_else(|| eyre::eyre!("contact created on sign-up"))?;

    let email = app.auth.current_user_email();
    let result = app.directory.delete(own.id(), email.as_deref()).await;

    eyre::ensure!(
        matches!(result, Err(DirectoryError::CannotDeleteSelf(_))),
        "own contact must be protected"
    );
    app.auth.log_out().await?;
    app.directory
        .delete(own.id(), app.auth.current_user_email().as_deref())
        .await?;
    app.contacts_settle(<[_]>::is_empty).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_assignees_render_as_placeholders(mut app: App) -> Result<(), eyre::Report> {
    app.start()?;
    let contact_id = app
        .directory
        .create(ContactDetails::new("tim taler", "tim@example.com", "+49 1")?)
        .await?;
    app.contacts_settle(|contacts| contacts.len() == 1).await?;

    let mut content = TaskContent::new("Pair on review", Category::TechnicalTask);
    content.assignees = vec![contact_id.clone()];
    app.board.create(TaskStatus::ToDo, content).await?;
    app.tasks_settle(|tasks| tasks.len() == 1).await?;

    let badge = app.directory.assignee_badge(&contact_id);
    eyre::ensure!(badge.initials == "TT", "live contact initials");

    app.directory.delete(&contact_id, None).await?;
    app.contacts_settle(<[_]>::is_empty).await?;

    let placeholder = app.directory.assignee_badge(&contact_id);
    eyre::ensure!(placeholder.name == "Unknown", "placeholder name");
    eyre::ensure!(placeholder.color == "#9327ff", "fallback colour");
    eyre::ensure!(
        app.board.board().len() == 1,
        "task keeps its dangling assignee"
    );
    Ok(())
}
