//! Domain model for contacts.

mod color;
mod contact;
mod error;
mod ids;
mod name;

pub use color::{FALLBACK_USER_COLOR, USER_COLORS, UserColor};
pub use contact::{Contact, ContactDetails, NewContact, looks_like_email};
pub use error::ContactDomainError;
pub use ids::ContactId;
pub use name::{capitalize_full_name, initials};
