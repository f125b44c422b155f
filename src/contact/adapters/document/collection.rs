//! Contact collection adapter over a [`DocumentStore`].

use super::ContactDocument;
use crate::contact::domain::{Contact, ContactId, NewContact};
use crate::store::{
    CollectionName, Direction, DocumentStore, Query, Snapshot, StoreResult, Subscription,
};
use std::sync::Arc;

/// Maps contacts to and from documents of one collection.
#[derive(Debug)]
pub struct ContactCollection<S: DocumentStore> {
    store: Arc<S>,
    name: CollectionName,
}

impl<S: DocumentStore> Clone for ContactCollection<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            name: self.name.clone(),
        }
    }
}

impl<S: DocumentStore> ContactCollection<S> {
    /// Creates a collection adapter.
    #[must_use]
    pub const fn new(store: Arc<S>, name: CollectionName) -> Self {
        Self { store, name }
    }

    /// Returns the collection name.
    #[must_use]
    pub const fn name(&self) -> &CollectionName {
        &self.name
    }

    /// Query used by the contact list: available contacts by name.
    #[must_use]
    pub fn listing_query(limit: usize) -> Query {
        Query::all()
            .where_eq("isAvailable", true)
            .order_by("name", Direction::Ascending)
            .limit(limit)
    }

    /// Stores a new contact and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns the store error when encoding or the write fails.
    pub async fn add(&self, contact: &NewContact) -> StoreResult<ContactId> {
        let fields = ContactDocument::from(contact).to_fields()?;
        let id = self.store.add(&self.name, fields).await?;
        Ok(ContactId::from(id))
    }

    /// Reads a single contact, listed or not.
    ///
    /// # Errors
    ///
    /// Returns the store error when the read or decoding fails.
    pub async fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        self.store
            .get(&self.name, &id.to_document_id())
            .await?
            .map(|document| ContactDocument::decode(&document))
            .transpose()
    }

    /// Rewrites all fields of an existing contact.
    ///
    /// # Errors
    ///
    /// Returns the store error when encoding or the write fails.
    pub async fn update(&self, contact: &Contact) -> StoreResult<()> {
        let fields = ContactDocument::from(contact).to_fields()?;
        self.store
            .update(&self.name, &contact.id().to_document_id(), fields)
            .await
    }

    /// Deletes a contact.
    ///
    /// # Errors
    ///
    /// Returns the store error when the delete fails.
    pub async fn delete(&self, id: &ContactId) -> StoreResult<()> {
        self.store.delete(&self.name, &id.to_document_id()).await
    }

    /// Subscribes to the contact listing.
    ///
    /// # Errors
    ///
    /// Returns the store error when the subscription fails.
    pub fn subscribe(&self, limit: usize) -> StoreResult<Subscription> {
        self.store.subscribe(&self.name, Self::listing_query(limit))
    }
}

/// Decodes a snapshot into contacts, skipping undecodable documents.
#[must_use]
pub fn decode_snapshot(snapshot: &Snapshot) -> Vec<Contact> {
    snapshot
        .documents()
        .iter()
        .filter_map(|document| match ContactDocument::decode(document) {
            Ok(contact) => Some(contact),
            Err(err) => {
                tracing::warn!(
                    document_id = %document.id(),
                    error = %err,
                    "skipping malformed contact"
                );
                None
            }
        })
        .collect()
}
