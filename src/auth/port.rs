//! Identity provider port.

use super::{AuthResult, Session};
use async_trait::async_trait;
use tokio::sync::watch;

/// Contract of the hosted identity service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Signs in with e-mail and password.
    ///
    /// # Errors
    ///
    /// Returns [`super::AuthError::InvalidCredentials`] when no account
    /// matches.
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session>;

    /// Starts a guest session.
    async fn sign_in_anonymously(&self) -> AuthResult<Session>;

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`super::AuthError::InvalidEmail`],
    /// [`super::AuthError::EmailInUse`] or
    /// [`super::AuthError::WeakPassword`] when the account cannot be created.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> AuthResult<Session>;

    /// Ends the current session.
    async fn sign_out(&self) -> AuthResult<()>;

    /// Observes the current session.
    fn session(&self) -> watch::Receiver<Option<Session>>;
}
