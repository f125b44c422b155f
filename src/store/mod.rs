//! Remote document store boundary.
//!
//! The board and contact list persist through a hosted document database
//! that exposes add, update, delete and real-time subscription operations
//! over named collections. This module defines that boundary:
//!
//! - Value types in [`document`] and [`query`]
//! - The [`DocumentStore`] port in [`port`]
//! - Snapshot delivery in [`subscription`] and local copies in [`replica`]
//! - An in-memory adapter in [`memory`]

pub mod document;
pub mod error;
pub mod memory;
pub mod port;
pub mod query;
pub mod replica;
pub mod subscription;

pub use document::{CollectionName, Document, DocumentId, Fields};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;
pub use port::DocumentStore;
pub use query::{Direction, Query, Snapshot};
pub use replica::Replica;
pub use subscription::{Subscription, SyncHandle, spawn_sync};
