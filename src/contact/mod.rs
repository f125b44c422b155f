//! Contact list management.
//!
//! Contacts are the people tasks get assigned to. The module follows the
//! same hexagonal layout as [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Document mapping in [`adapters`]
//! - The synchronized contact directory in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
