//! Authentication and sessions.
//!
//! The [`AuthProvider`] port abstracts the hosted identity service;
//! [`InMemoryAuthProvider`] implements it for tests and the demo binary.
//! [`AuthService`] adds the flows the app needs on top, such as creating
//! the user's contact on sign-up.

mod error;
mod memory;
mod port;
mod service;
mod session;

pub use error::{AuthError, AuthResult};
pub use memory::{InMemoryAuthProvider, MIN_PASSWORD_LEN};
pub use port::AuthProvider;
pub use service::AuthService;
pub use session::{Session, UserId};

#[cfg(test)]
mod tests;
