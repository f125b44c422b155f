//! Signed-in user session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User identifier.
    pub user_id: UserId,
    /// E-mail address; `None` for guests.
    pub email: Option<String>,
    /// Name entered at sign-up.
    pub display_name: Option<String>,
    /// Whether this is a guest session.
    pub is_anonymous: bool,
}

impl Session {
    /// Name shown in the greeting: the display name, or "Guest".
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        match (&self.display_name, self.is_anonymous) {
            (Some(name), false) if !name.trim().is_empty() => name,
            _ => "Guest",
        }
    }
}
