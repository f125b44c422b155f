//! Wire representation of contact documents.

use crate::contact::domain::{Contact, ContactId, NewContact, UserColor, capitalize_full_name};
use crate::store::{Document, Fields, StoreError, document::to_fields};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Contact document as stored in the `contacts` collection.
///
/// Decoding is lenient: missing fields take their defaults and numeric
/// phone numbers are read as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDocument {
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number.
    #[serde(deserialize_with = "phone_from_value")]
    pub phone: String,
    /// Whether the contact is listed.
    pub is_available: bool,
    /// Badge colour.
    pub user_color: Option<String>,
}

fn phone_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

impl ContactDocument {
    /// Decodes a stored document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] when a field has an
    /// incompatible type.
    pub fn from_fields(fields: &Fields) -> Result<Self, StoreError> {
        serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|err| StoreError::InvalidPayload(err.to_string()))
    }

    /// Encodes the document payload.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] when serialization fails.
    pub fn to_fields(&self) -> Result<Fields, StoreError> {
        to_fields(self)
    }

    /// Maps the document onto the domain contact.
    ///
    /// The stored name is re-capitalized and an unparsable colour is dropped.
    #[must_use]
    pub fn into_contact(self, id: ContactId) -> Contact {
        let user_color = self
            .user_color
            .and_then(|color| match UserColor::new(color) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    tracing::warn!(contact_id = %id, error = %err, "ignoring stored colour");
                    None
                }
            });
        Contact::new(
            id,
            NewContact {
                name: capitalize_full_name(&self.name),
                email: self.email,
                phone: self.phone,
                is_available: self.is_available,
                user_color,
            },
        )
    }

    /// Decodes a snapshot document straight into a contact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] when decoding fails.
    pub fn decode(document: &Document) -> Result<Contact, StoreError> {
        let id = ContactId::from(document.id().clone());
        Ok(Self::from_fields(document.fields())?.into_contact(id))
    }
}

impl From<&NewContact> for ContactDocument {
    fn from(value: &NewContact) -> Self {
        Self {
            name: value.name.clone(),
            email: value.email.clone(),
            phone: value.phone.clone(),
            is_available: value.is_available,
            user_color: value.user_color.as_ref().map(|color| color.as_str().to_owned()),
        }
    }
}

impl From<&Contact> for ContactDocument {
    fn from(value: &Contact) -> Self {
        Self {
            name: value.name().to_owned(),
            email: value.email().to_owned(),
            phone: value.phone().to_owned(),
            is_available: value.is_available(),
            user_color: value.user_color().map(|color| color.as_str().to_owned()),
        }
    }
}
