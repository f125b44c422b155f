//! Sign-up, log-in and guest flows.

use super::helpers::{App, app};
use join_board::auth::AuthError;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_up_creates_a_session_and_a_contact(mut app: App) -> Result<(), eyre::Report> {
    app.start()?;
    let session = app
        .auth
        .sign_up("  lea  berger ", "Lea@Example.com", "hunter22")
        .await?;

    eyre::ensure!(session.greeting_name() == "Lea Berger", "display name");
    eyre::ensure!(!session.is_anonymous, "registered session");
    app.contacts_settle(|contacts| contacts.len() == 1).await?;
    let contact = app
        .directory
        .contacts()
        .into_iter()
        .next()
        .ok_or_else(|| eyre::eyre!("contact created on sign-up"))?;
    eyre::ensure!(contact.name() == "Lea Berger", "capitalized contact name");
    eyre::ensure!(contact.phone().is_empty(), "no phone on sign-up");
    eyre::ensure!(contact.user_color().is_some(), "random colour assigned");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn log_in_after_log_out_restores_the_session(mut app: App) -> Result<(), eyre::Report> {
    app.start()?;
    app.auth
        .sign_up("lea berger", "lea@example.com", "hunter22")
        .await?;
    app.auth.log_out().await?;
    eyre::ensure!(app.auth.current_session().is_none(), "logged out");

    let rejected = app.auth.log_in("lea@example.com", "wrong-password").await;
    eyre::ensure!(
        matches!(rejected, Err(AuthError::InvalidCredentials)),
        "wrong password is rejected"
    );

    app.auth.log_in("LEA@example.com", "hunter22").await?;
    eyre::ensure!(
        app.auth.current_user_email().as_deref() == Some("lea@example.com"),
        "session carries the account e-mail"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_sign_up_leaves_the_directory_untouched(
    mut app: App,
) -> Result<(), eyre::Report> {
    app.start()?;
    app.auth
        .sign_up("lea berger", "lea@example.com", "hunter22")
        .await?;
    app.contacts_settle(|contacts| contacts.len() == 1).await?;

    let duplicate = app
        .auth
        .sign_up("other lea", "lea@example.com", "hunter22")
        .await;

    eyre::ensure!(
        matches!(duplicate, Err(AuthError::EmailInUse(_))),
        "second account is refused"
    );
    eyre::ensure!(app.directory.contacts().len() == 1, "no second contact");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guests_are_greeted_generically(app: App) -> Result<(), eyre::Report> {
    let session = app.auth.guest_log_in().await?;

    eyre::ensure!(session.is_anonymous, "guest session");
    eyre::ensure!(session.greeting_name() == "Guest", "guest greeting");
    eyre::ensure!(app.auth.current_user_email().is_none(), "guests have no e-mail");
    Ok(())
}
