//! Category entity model and DTOs.

use backstage_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category row from the `categories` table.
///
/// The slug is derived from the name on every save, so a renamed category
/// changes its public URL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// DTO for creating a new category. The slug is computed, not supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

/// DTO for renaming a category. Renaming recomputes the slug.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
}
