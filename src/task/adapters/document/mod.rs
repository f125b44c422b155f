//! Document-store backed task collection.

mod collection;
mod models;

pub use collection::{TaskCollection, decode_snapshot};
pub use models::TaskDocument;
