//! Shared types, errors, and note validation rules.
//!
//! This crate has no internal dependencies so both the store and the HTTP
//! layer can depend on it.

pub mod error;
pub mod notes;
pub mod types;
