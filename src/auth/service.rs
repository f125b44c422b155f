//! Log-in, guest log-in, sign-up and log-out flows.

use super::{AuthError, AuthProvider, AuthResult, Session};
use crate::contact::{
    domain::{ContactDetails, ContactDomainError},
    services::{ContactDirectory, DirectoryError},
};
use crate::store::DocumentStore;
use std::sync::Arc;
use tokio::sync::watch;

/// Authentication flows of the app.
#[derive(Debug)]
pub struct AuthService<P: AuthProvider, S: DocumentStore> {
    provider: Arc<P>,
    directory: ContactDirectory<S>,
}

impl<P: AuthProvider, S: DocumentStore> Clone for AuthService<P, S> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            directory: self.directory.clone(),
        }
    }
}

impl<P: AuthProvider, S: DocumentStore + 'static> AuthService<P, S> {
    /// Creates the service; sign-ups add their contact to `directory`.
    #[must_use]
    pub const fn new(provider: Arc<P>, directory: ContactDirectory<S>) -> Self {
        Self {
            provider,
            directory,
        }
    }

    /// Signs in with e-mail and password.
    ///
    /// # Errors
    ///
    /// Returns the provider error, typically
    /// [`super::AuthError::InvalidCredentials`].
    pub async fn log_in(&self, email: &str, password: &str) -> AuthResult<Session> {
        let session = self
            .provider
            .sign_in(email, password)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "log-in rejected"))?;
        tracing::info!(user_id = %session.user_id, "user logged in");
        Ok(session)
    }

    /// Starts a guest session.
    ///
    /// # Errors
    ///
    /// Returns the provider error.
    pub async fn guest_log_in(&self) -> AuthResult<Session> {
        let session = self.provider.sign_in_anonymously().await?;
        tracing::info!(user_id = %session.user_id, "guest logged in");
        Ok(session)
    }

    /// Creates an account and the user's contact.
    ///
    /// The contact gets the capitalized name, the e-mail address, an empty
    /// phone number and a random colour.
    ///
    /// # Errors
    ///
    /// Returns [`super::AuthError::InvalidEmail`] or
    /// [`super::AuthError::Contact`] when name or e-mail are invalid, and
    /// the provider error when the account cannot be created.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> AuthResult<Session> {
        let details = ContactDetails::new(name, email, "").map_err(|err| match err {
            ContactDomainError::InvalidEmail(value) => AuthError::InvalidEmail(value),
            other => DirectoryError::Domain(other).into(),
        })?;
        let session = self
            .provider
            .sign_up(details.email(), password, details.name())
            .await?;
        let contact_id = self.directory.create(details).await?;
        tracing::info!(user_id = %session.user_id, contact_id = %contact_id, "user signed up");
        Ok(session)
    }

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns the provider error.
    pub async fn log_out(&self) -> AuthResult<()> {
        self.provider.sign_out().await?;
        tracing::info!("user logged out");
        Ok(())
    }

    /// Observes the current session.
    #[must_use]
    pub fn session(&self) -> watch::Receiver<Option<Session>> {
        self.provider.session()
    }

    /// Returns the current session.
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.provider.session().borrow().clone()
    }

    /// Returns the e-mail address of the signed-in user; `None` for guests.
    #[must_use]
    pub fn current_user_email(&self) -> Option<String> {
        self.current_session().and_then(|session| session.email)
    }
}
