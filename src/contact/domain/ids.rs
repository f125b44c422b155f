//! Identifier type for contacts.

use super::ContactDomainError;
use crate::store::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Creates a validated contact identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDomainError::EmptyId`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ContactDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContactDomainError::EmptyId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier of the backing document.
    #[must_use]
    pub fn to_document_id(&self) -> DocumentId {
        DocumentId::from(self.clone())
    }
}

impl From<DocumentId> for ContactId {
    fn from(value: DocumentId) -> Self {
        Self(value.as_str().to_owned())
    }
}

impl From<ContactId> for DocumentId {
    fn from(value: ContactId) -> Self {
        Self::from_trusted(value.0)
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
