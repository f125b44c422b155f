//! Contact entity and its validated form input.

use super::{ContactDomainError, ContactId, UserColor, capitalize_full_name};

/// Validated name, e-mail and phone entered in the contact dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    name: String,
    email: String,
    phone: String,
}

impl ContactDetails {
    /// Validates and normalizes contact form input.
    ///
    /// The name is capitalized word by word, e-mail and phone are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDomainError::EmptyName`] for a blank name and
    /// [`ContactDomainError::InvalidEmail`] when the e-mail is not of the
    /// form `local@domain`.
    pub fn new(
        name: impl AsRef<str>,
        email: impl AsRef<str>,
        phone: impl AsRef<str>,
    ) -> Result<Self, ContactDomainError> {
        let capitalized = capitalize_full_name(name.as_ref());
        if capitalized.is_empty() {
            return Err(ContactDomainError::EmptyName);
        }

        let trimmed_email = email.as_ref().trim();
        if !looks_like_email(trimmed_email) {
            return Err(ContactDomainError::InvalidEmail(email.as_ref().to_owned()));
        }

        Ok(Self {
            name: capitalized,
            email: trimmed_email.to_owned(),
            phone: phone.as_ref().trim().to_owned(),
        })
    }

    /// Returns the capitalized name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the trimmed phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Returns `true` for values of the form `local@domain` without whitespace.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

/// Contact payload before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number as entered.
    pub phone: String,
    /// Whether the contact shows up in the contact list.
    pub is_available: bool,
    /// Badge colour, if one was assigned.
    pub user_color: Option<UserColor>,
}

impl NewContact {
    /// Creates an available contact with a random palette colour.
    #[must_use]
    pub fn from_details(details: ContactDetails) -> Self {
        Self {
            name: details.name,
            email: details.email,
            phone: details.phone,
            is_available: true,
            user_color: Some(UserColor::random()),
        }
    }
}

/// Stored contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    name: String,
    email: String,
    phone: String,
    is_available: bool,
    user_color: Option<UserColor>,
}

impl Contact {
    /// Creates a contact from its identifier and payload.
    #[must_use]
    pub fn new(id: ContactId, data: NewContact) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            is_available: data.is_available,
            user_color: data.user_color,
        }
    }

    /// Returns the contact identifier.
    #[must_use]
    pub const fn id(&self) -> &ContactId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns whether the contact is listed.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.is_available
    }

    /// Returns the badge colour, if any.
    #[must_use]
    pub const fn user_color(&self) -> Option<&UserColor> {
        self.user_color.as_ref()
    }

    /// Returns a copy with name, e-mail and phone replaced, keeping
    /// availability and colour.
    #[must_use]
    pub fn with_details(&self, details: ContactDetails) -> Self {
        Self {
            id: self.id.clone(),
            name: details.name,
            email: details.email,
            phone: details.phone,
            is_available: self.is_available,
            user_color: self.user_color.clone(),
        }
    }

    /// Returns `true` when this contact belongs to the given e-mail address,
    /// compared trimmed and case-insensitively.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        normalize_email(&self.email) == normalize_email(email)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
