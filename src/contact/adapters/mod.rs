//! Adapter implementations for contact persistence.

pub mod document;
