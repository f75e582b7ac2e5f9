//! Producer entity model and DTOs.

use backstage_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A producer row from the `producers` table.
///
/// A producer is optionally linked one-to-one from an actor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Producer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
}

impl Producer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// DTO for creating a new producer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProducer {
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
}

/// DTO for updating a producer. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProducer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
}
