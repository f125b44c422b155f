//! Error types for authentication.

use crate::contact::services::DirectoryError;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by authentication flows.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The e-mail address is not of the form `local@domain`.
    #[error("invalid e-mail address '{0}'")]
    InvalidEmail(String),

    /// An account with this e-mail address already exists.
    #[error("e-mail address already in use: {0}")]
    EmailInUse(String),

    /// The password is shorter than allowed.
    #[error("password must be at least {min_len} characters")]
    WeakPassword {
        /// Minimum password length.
        min_len: usize,
    },

    /// E-mail and password do not match an account.
    #[error("invalid e-mail or password")]
    InvalidCredentials,

    /// Creating the user's contact failed.
    #[error("failed to create contact: {0}")]
    Contact(Arc<DirectoryError>),

    /// The identity backend failed.
    #[error("auth backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
    /// Wraps a backend failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}

impl From<DirectoryError> for AuthError {
    fn from(err: DirectoryError) -> Self {
        Self::Contact(Arc::new(err))
    }
}

/// Result type for authentication flows.
pub type AuthResult<T> = Result<T, AuthError>;
