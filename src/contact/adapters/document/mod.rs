//! Document-store backed contact collection.

mod collection;
mod models;

pub use collection::{ContactCollection, decode_snapshot};
pub use models::ContactDocument;
