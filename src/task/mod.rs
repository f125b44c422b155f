//! Kanban board tasks.
//!
//! Tasks live in four status columns and carry an integer `order` that ranks
//! them inside their column. The board keeps that ranking dense: every
//! drag-and-drop rewrites the order of all tasks in the source and
//! destination column to their display index and persists each change.
//! The module follows hexagonal architecture:
//!
//! - Domain types and the ordering protocol in [`domain`]
//! - Document mapping in [`adapters`]
//! - The task cache, board service and task form in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
