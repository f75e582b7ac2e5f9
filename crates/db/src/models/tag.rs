//! Tag entity model and DTOs.

use backstage_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tag row from the `tags` table.
///
/// Tag names are unique; the slug is derived from the name on every save.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// DTO for creating a new tag. The slug is computed, not supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
}

/// DTO for renaming a tag. Renaming recomputes the slug.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTag {
    pub name: String,
}
