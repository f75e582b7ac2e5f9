//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where partial updates apply

pub mod actor;
pub mod category;
pub mod password_reset;
pub mod producer;
pub mod role;
pub mod session;
pub mod tag;
pub mod user;
