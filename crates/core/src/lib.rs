//! Framework-free domain logic shared by the db and api crates.
//!
//! Contains the error taxonomy, shared type aliases, role names, and the
//! pure helpers (slug derivation, pluralization) that the catalogue is
//! built on. Nothing in this crate touches the network or the database.

pub mod error;
pub mod roles;
pub mod slug;
pub mod text;
pub mod types;
