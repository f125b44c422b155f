//! Identifier and payload types for stored documents.

use super::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON object payload of a stored document.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Name of a document collection, such as `tasks` or `contacts`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Collection holding board tasks.
    pub const TASKS: &'static str = "tasks";
    /// Collection holding contacts.
    pub const CONTACTS: &'static str = "contacts";

    /// Creates a validated collection name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCollectionName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, StoreError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyCollectionName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the default task collection name.
    #[must_use]
    pub fn tasks() -> Self {
        Self(Self::TASKS.to_owned())
    }

    /// Returns the default contact collection name.
    #[must_use]
    pub fn contacts() -> Self {
        Self(Self::CONTACTS.to_owned())
    }

    /// Returns the collection name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CollectionName {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CollectionName> for String {
    fn from(value: CollectionName) -> Self {
        value.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Store-assigned identifier of a document within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a validated document identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyDocumentId`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, StoreError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyDocumentId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a value already known to be a non-empty identifier.
    pub(crate) const fn from_trusted(value: String) -> Self {
        Self(value)
    }

    /// Creates a fresh random identifier.
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

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored document: its identifier and field payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: DocumentId,
    fields: Fields,
}

impl Document {
    /// Creates a document from its parts.
    #[must_use]
    pub const fn new(id: DocumentId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Returns the document identifier.
    #[must_use]
    pub const fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Returns the document fields.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Returns a single field value, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }

    /// Merges the given fields into this document, replacing existing keys.
    pub fn merge(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    /// Splits the document into identifier and fields.
    #[must_use]
    pub fn into_parts(self) -> (DocumentId, Fields) {
        (self.id, self.fields)
    }
}

/// Converts a serializable value into document fields.
///
/// # Errors
///
/// Returns [`StoreError::InvalidPayload`] when the value does not serialize
/// to a JSON object.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Fields, StoreError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(StoreError::InvalidPayload(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(err) => Err(StoreError::InvalidPayload(err.to_string())),
    }
}
