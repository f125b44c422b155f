//! Error types for contact validation.

use thiserror::Error;

/// Errors returned while constructing contact values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactDomainError {
    /// The contact identifier is empty after trimming.
    #[error("contact identifier must not be empty")]
    EmptyId,

    /// The contact name is empty after trimming.
    #[error("contact name must not be empty")]
    EmptyName,

    /// The e-mail address is not of the form `local@domain`.
    #[error("invalid e-mail address '{0}'")]
    InvalidEmail(String),

    /// The colour is not a `#rrggbb` hex value.
    #[error("invalid user colour '{0}', expected #rrggbb")]
    InvalidColor(String),
}
