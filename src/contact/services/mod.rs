//! Application services for the contact list.

mod directory;

pub use directory::{AssigneeBadge, ContactDirectory, DirectoryError, DirectoryResult};
