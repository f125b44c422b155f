//! Badge colours assigned to contacts.

use super::ContactDomainError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Palette new contacts draw their badge colour from.
pub const USER_COLORS: [&str; 15] = [
    "#ff4646", "#ff745e", "#ffa35e", "#ff7a00", "#ffbb2b", "#ffc701", "#ffe62b", "#c3ff2b",
    "#1fd7c1", "#00bee8", "#0038ff", "#fc71ff", "#ff5eb3", "#6e52ff", "#9327ff",
];

/// Colour shown for contacts without a stored colour or unknown assignees.
pub const FALLBACK_USER_COLOR: &str = "#9327ff";

/// Validated `#rrggbb` badge colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserColor(String);

impl UserColor {
    /// Creates a validated colour, normalized to lower case.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDomainError::InvalidColor`] when the value is not a
    /// `#` followed by six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ContactDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let is_valid = normalized
            .strip_prefix('#')
            .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));
        if !is_valid {
            return Err(ContactDomainError::InvalidColor(raw));
        }
        Ok(Self(normalized))
    }

    /// Picks a palette colour using the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Picks a palette colour using the given generator.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let picked = USER_COLORS.choose(rng).unwrap_or(&FALLBACK_USER_COLOR);
        Self((*picked).to_owned())
    }

    /// Returns the fallback colour.
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_USER_COLOR.to_owned())
    }

    /// Returns the colour as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserColor {
    type Error = ContactDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserColor> for String {
    fn from(value: UserColor) -> Self {
        value.0
    }
}

impl fmt::Display for UserColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
