//! Synchronized contact directory with create, update and delete flows.

use crate::contact::{
    adapters::document::{ContactCollection, decode_snapshot},
    domain::{
        Contact, ContactDetails, ContactDomainError, ContactId, FALLBACK_USER_COLOR, NewContact,
        initials,
    },
};
use crate::store::{CollectionName, DocumentStore, Replica, StoreError, SyncHandle, spawn_sync};
use std::sync::Arc;
use thiserror::Error;

/// Placeholder name shown for assignees missing from the directory.
const UNKNOWN_NAME: &str = "Unknown";

/// Errors returned by contact directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Contact input failed validation.
    #[error(transparent)]
    Domain(#[from] ContactDomainError),

    /// The document store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The contact is not in the directory.
    #[error("contact not found: {0}")]
    NotFound(ContactId),

    /// The signed-in user tried to delete their own contact.
    #[error("contact {0} belongs to the signed-in user and cannot be deleted")]
    CannotDeleteSelf(ContactId),
}

/// Result type for contact directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Name, initials and colour shown for a task assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeBadge {
    /// Display name.
    pub name: String,
    /// Up to two initials.
    pub initials: String,
    /// Badge colour.
    pub color: String,
}

/// Contact list kept in sync with the `contacts` collection.
#[derive(Debug)]
pub struct ContactDirectory<S: DocumentStore> {
    collection: ContactCollection<S>,
    limit: usize,
    contacts: Replica<Contact>,
}

impl<S: DocumentStore> Clone for ContactDirectory<S> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            limit: self.limit,
            contacts: self.contacts.clone(),
        }
    }
}

impl<S: DocumentStore + 'static> ContactDirectory<S> {
    /// Creates a directory over the given collection that lists at most
    /// `limit` contacts.
    #[must_use]
    pub fn new(store: Arc<S>, collection: CollectionName, limit: usize) -> Self {
        Self {
            collection: ContactCollection::new(store, collection),
            limit,
            contacts: Replica::new(),
        }
    }

    /// Starts mirroring the contact listing into the directory.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] when the subscription fails.
    pub fn start_sync(&self) -> DirectoryResult<SyncHandle> {
        let subscription = self.collection.subscribe(self.limit)?;
        let contacts = self.contacts.clone();
        Ok(spawn_sync(subscription, move |snapshot| {
            contacts.replace(decode_snapshot(&snapshot));
        }))
    }

    /// Returns the listed contacts ordered by name.
    #[must_use]
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.items()
    }

    /// Returns `true` until the first snapshot arrived.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.contacts.is_loading()
    }

    /// Finds a listed contact.
    #[must_use]
    pub fn find(&self, id: &ContactId) -> Option<Contact> {
        self.contacts
            .read(|contacts| contacts.iter().find(|contact| contact.id() == id).cloned())
    }

    /// Waits until `predicate` holds for the listed contacts.
    pub async fn wait_for(&self, predicate: impl Fn(&[Contact]) -> bool) {
        self.contacts.wait_for(predicate).await;
    }

    /// Creates an available contact with a random badge colour.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Store`] when the write fails.
    pub async fn create(&self, details: ContactDetails) -> DirectoryResult<ContactId> {
        let contact = NewContact::from_details(details);
        let id = self.collection.add(&contact).await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to create contact");
        })?;
        tracing::info!(contact_id = %id, "contact created");
        Ok(id)
    }

    /// Replaces name, e-mail and phone of a listed contact.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] for unknown contacts and
    /// [`DirectoryError::Store`] when the write fails.
    pub async fn update(
        &self,
        id: &ContactId,
        details: ContactDetails,
    ) -> DirectoryResult<Contact> {
        let current = self
            .find(id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))?;
        let updated = current.with_details(details);
        self.collection.update(&updated).await.inspect_err(|err| {
            tracing::error!(contact_id = %id, error = %err, "failed to update contact");
        })?;
        Ok(updated)
    }

    /// Returns `false` when the contact belongs to the signed-in user.
    #[must_use]
    pub fn can_delete(contact: &Contact, current_user_email: Option<&str>) -> bool {
        match current_user_email.map(str::trim) {
            Some(email) if !email.is_empty() => !contact.has_email(email),
            _ => true,
        }
    }

    /// Deletes a contact unless it belongs to the signed-in user.
    ///
    /// Contacts outside the listing are read from the store before the
    /// ownership check.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] for unknown contacts,
    /// [`DirectoryError::CannotDeleteSelf`] for the user's own contact and
    /// [`DirectoryError::Store`] when the lookup or the delete fails.
    pub async fn delete(
        &self,
        id: &ContactId,
        current_user_email: Option<&str>,
    ) -> DirectoryResult<()> {
        let contact = self.lookup(id).await?;
        if !Self::can_delete(&contact, current_user_email) {
            return Err(DirectoryError::CannotDeleteSelf(id.clone()));
        }
        self.collection.delete(id).await?;
        tracing::info!(contact_id = %id, "contact deleted");
        Ok(())
    }

    async fn lookup(&self, id: &ContactId) -> DirectoryResult<Contact> {
        if let Some(contact) = self.find(id) {
            return Ok(contact);
        }
        self.collection
            .get(id)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))
    }

    /// Returns the badge for an assignee, with placeholders for contacts
    /// missing from the directory.
    #[must_use]
    pub fn assignee_badge(&self, id: &ContactId) -> AssigneeBadge {
        self.find(id).map_or_else(
            || AssigneeBadge {
                name: UNKNOWN_NAME.to_owned(),
                initials: initials(UNKNOWN_NAME),
                color: FALLBACK_USER_COLOR.to_owned(),
            },
            |contact| AssigneeBadge {
                name: contact.name().to_owned(),
                initials: initials(contact.name()),
                color: contact.user_color().map_or_else(
                    || FALLBACK_USER_COLOR.to_owned(),
                    |color| color.as_str().to_owned(),
                ),
            },
        )
    }
}
