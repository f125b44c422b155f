//! Join board: the core of a Kanban task and contact board.
//!
//! Tasks and contacts are documents in a schemaless store. Every view reads
//! from a local replica that a live subscription keeps current, and every
//! mutation goes straight to the store; the next snapshot settles the
//! replica.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the document store and the
//!   identity provider
//! - **Adapters**: Document mapping and in-memory implementations of ports
//!
//! # Modules
//!
//! - [`store`]: Document store port, subscriptions and replicas
//! - [`task`]: Board columns, drag-and-drop ordering and the task form
//! - [`contact`]: Contact directory and assignee badges
//! - [`auth`]: Sign-up, log-in and guest sessions
//! - [`summary`]: Dashboard metrics and greetings
//! - [`config`]: TOML configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod auth;
pub mod config;
pub mod contact;
pub mod store;
pub mod summary;
pub mod task;
pub mod telemetry;
